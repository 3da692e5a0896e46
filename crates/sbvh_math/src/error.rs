//! Error types for the math kernel

use thiserror::Error;

/// Math kernel errors
///
/// Numeric edge cases (division by zero, singular matrices, empty boxes) are
/// total and never surface here. Only malformed foreign input does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A slice handed to a fixed-size constructor had the wrong length
    #[error("Slice length mismatch: expected {expected} elements, found {found}")]
    SliceLength { expected: usize, found: usize },

    /// A checked accessor was given an index outside the container
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for math operations
pub type Result<T> = std::result::Result<T, MathError>;
