use thiserror::Error;

/// Custom error types for gridscan
///
/// A check that merely fails ("not binary", "border not empty") is never an
/// error. These variants signal caller misuse, unusable input, or a broken
/// internal invariant.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty grid: {height}x{width} (both dimensions must be at least 1)")]
    EmptyGrid { height: usize, width: usize },

    #[error("Grid of {height}x{width} needs {expected} samples, got {actual}")]
    DimensionMismatch {
        height: usize,
        width: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Image is not binary (min {min}, max {max}); no background level is defined")]
    NotBinary { min: i32, max: i32 },

    #[error("Precondition violated: {0}")]
    Precondition(String),

    #[error(
        "Inconsistent corner counts: external {external} - internal {internal} is not a multiple of 4"
    )]
    InconsistentCorners { external: usize, internal: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for gridscan operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
