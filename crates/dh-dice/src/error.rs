//! Error types for dice notation handling.

/// Errors produced while parsing dice notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The input does not match the `XdY+Z` grammar.
    #[error("invalid dice notation: {0}")]
    InvalidNotation(String),

    /// The dice count is outside the allowed range.
    #[error("number of dice must be between 1 and 100, got {0}")]
    InvalidDiceCount(u64),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
