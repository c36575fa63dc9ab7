// ============================================================================
// gridscan-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// This module provides error handling utilities for the CLI that integrate
// with the gridscan-core error types while adding CLI-specific error
// contexts (which file failed to load, which step was running).

// ---- Internal crate imports ----
use gridscan_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

// ============================================================================
// ERROR CONVERSION UTILITIES
// ============================================================================

/// Extension trait for adding context to errors in the CLI.
///
/// This trait provides methods similar to anyhow's context methods
/// but converts to CoreError instead.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;

    /// Add context using a closure (for lazy evaluation).
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", context, core_error))
        })
    }

    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", f(), core_error))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wraps_core_error() {
        let result: Result<(), CoreError> = Err(CoreError::InvalidInput("row 3".to_string()));
        let err = result.cli_context("Failed to load grid.txt").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Operation failed: Failed to load grid.txt: Invalid input: row 3"
        );
    }

    #[test]
    fn test_io_error_context_is_lazy_and_keeps_source() {
        let missing = std::fs::read_to_string("/nonexistent/gridscan/grid.txt");
        let err = missing
            .cli_with_context(|| "Failed to read grid.txt")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Operation failed: Failed to read grid.txt: IO error:"));
    }

    #[test]
    fn test_ok_passes_through() {
        let value: Result<u8, CoreError> = Ok(3);
        assert_eq!(value.cli_context("unused").unwrap(), 3);
    }
}
