//! Configuration structures and constants for the gridscan-core library.
//!
//! This module provides the knobs that decide how strictly the object
//! counter treats its inputs. The four analyzers themselves take no
//! configuration; only the gating and consistency checks around the corner
//! count do.

mod builder;
mod utils;

use serde::{Deserialize, Serialize};

pub use builder::AnalysisConfigBuilder;
pub use utils::{get_env_bool, get_env_string};

// Default constants

/// Diagonal-only foreground contacts block object counting by default.
/// The corner formula cannot tell whether two diagonally touching pixels
/// belong to one object or two.
pub const DEFAULT_ALLOW_DIAGONAL_CONTACTS: bool = false;

/// A corner difference that is not a multiple of 4 is an error by default.
pub const DEFAULT_STRICT_CONSISTENCY: bool = true;

/// Compare the corner count against the exact component count by default.
pub const DEFAULT_CROSS_CHECK_COMPONENTS: bool = true;

/// Environment variable overriding `allow_diagonal_contacts`
pub const ENV_ALLOW_DIAGONAL: &str = "GRIDSCAN_ALLOW_DIAGONAL";

/// Environment variable overriding `strict_consistency`
pub const ENV_STRICT_CONSISTENCY: &str = "GRIDSCAN_STRICT_CONSISTENCY";

/// Environment variable overriding `cross_check_components`
pub const ENV_CROSS_CHECK: &str = "GRIDSCAN_CROSS_CHECK";

/// Analysis configuration.
///
/// # Examples
///
/// ```rust
/// use gridscan_core::config::AnalysisConfigBuilder;
///
/// let config = AnalysisConfigBuilder::new()
///     .allow_diagonal_contacts(true)
///     .strict_consistency(false)
///     .build();
/// assert!(config.allow_diagonal_contacts);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Count objects even when foreground pixels touch only diagonally
    pub allow_diagonal_contacts: bool,

    /// Fail with `CoreError::InconsistentCorners` on a non-exact division.
    /// When false the count is reported as unavailable instead.
    pub strict_consistency: bool,

    /// Log a warning when the corner count disagrees with the
    /// component count (objects with holes do this)
    pub cross_check_components: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            allow_diagonal_contacts: DEFAULT_ALLOW_DIAGONAL_CONTACTS,
            strict_consistency: DEFAULT_STRICT_CONSISTENCY,
            cross_check_components: DEFAULT_CROSS_CHECK_COMPONENTS,
        }
    }
}

impl AnalysisConfig {
    /// Defaults, overridden by `GRIDSCAN_*` environment variables when set.
    pub fn from_env() -> Self {
        Self {
            allow_diagonal_contacts: get_env_bool(
                ENV_ALLOW_DIAGONAL,
                DEFAULT_ALLOW_DIAGONAL_CONTACTS,
            ),
            strict_consistency: get_env_bool(ENV_STRICT_CONSISTENCY, DEFAULT_STRICT_CONSISTENCY),
            cross_check_components: get_env_bool(ENV_CROSS_CHECK, DEFAULT_CROSS_CHECK_COMPONENTS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert!(!config.allow_diagonal_contacts);
        assert!(config.strict_consistency);
        assert!(config.cross_check_components);
    }

    #[test]
    fn test_config_serializes_to_json() {
        let json = serde_json::to_string(&AnalysisConfig::default()).unwrap();
        assert!(json.contains("\"strict_consistency\":true"));
        let back: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AnalysisConfig::default());
    }
}
