//! Error types for treasure generation.

use thiserror::Error;

/// Result type for treasure operations.
pub type TreasureResult<T> = Result<T, TreasureError>;

/// Errors that can occur while handling a treasure request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreasureError {
    /// The challenge rating input is not an integer.
    #[error("challenge rating must be a number, got '{0}'")]
    RatingNotNumeric(String),

    /// The challenge rating is below the minimum of 1.
    #[error("challenge rating must be at least 1, got {0}")]
    RatingTooLow(i64),
}
