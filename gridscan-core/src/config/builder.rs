// ============================================================================
// gridscan-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for AnalysisConfig
//
// This module implements the builder pattern for the AnalysisConfig
// structure, providing a fluent API for creating configurations that start
// from the defaults (or from the environment) and override single fields.

// ---- Internal crate imports ----
use super::AnalysisConfig;

/// Builder for creating AnalysisConfig instances.
///
/// # Examples
///
/// ```rust
/// use gridscan_core::config::AnalysisConfigBuilder;
///
/// let config = AnalysisConfigBuilder::new()
///     .cross_check_components(false)
///     .build();
/// assert!(!config.cross_check_components);
/// assert!(config.strict_consistency);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Creates a new builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded from `AnalysisConfig::from_env`.
    pub fn from_env() -> Self {
        Self {
            config: AnalysisConfig::from_env(),
        }
    }

    /// Sets whether diagonal-only contacts may be counted.
    ///
    /// # Arguments
    ///
    /// * `allow` - Count objects even when foreground touches only diagonally
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn allow_diagonal_contacts(mut self, allow: bool) -> Self {
        self.config.allow_diagonal_contacts = allow;
        self
    }

    /// Sets whether a non-exact corner division is an error.
    ///
    /// # Arguments
    ///
    /// * `strict` - Fail instead of reporting the count as unavailable
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn strict_consistency(mut self, strict: bool) -> Self {
        self.config.strict_consistency = strict;
        self
    }

    /// Sets whether the corner count is compared with the component count.
    pub fn cross_check_components(mut self, enable: bool) -> Self {
        self.config.cross_check_components = enable;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> AnalysisConfig {
        self.config
    }
}
