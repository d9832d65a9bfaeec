//! Challenge rating handling.
//!
//! The rating drives every table lookup. Any value of 1 or more is
//! accepted and kept as entered for display; lookups clamp to the 1-20
//! table range, so a CR 25 encounter pays out exactly like CR 20.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TreasureError, TreasureResult};

/// Highest tier with its own table entry.
pub const MAX_TIER: u32 = 20;

/// An encounter's challenge rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeRating(u32);

impl ChallengeRating {
    /// Create a rating. Values below 1 are raised to 1.
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    /// Parse a rating from user input: a decimal integer of at least 1.
    pub fn parse(s: &str) -> TreasureResult<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| TreasureError::RatingNotNumeric(s.trim().to_string()))?;
        if value < 1 {
            return Err(TreasureError::RatingTooLow(value));
        }
        Ok(Self(u32::try_from(value).unwrap_or(u32::MAX)))
    }

    /// The rating as entered.
    pub fn value(self) -> u32 {
        self.0
    }

    /// The rating clamped to the table range.
    pub fn clamped(self) -> u32 {
        self.0.clamp(1, MAX_TIER)
    }
}

impl fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_positive_integers() {
        assert_eq!(ChallengeRating::parse("5"), Ok(ChallengeRating::new(5)));
        assert_eq!(ChallengeRating::parse(" 20 "), Ok(ChallengeRating::new(20)));
        assert_eq!(ChallengeRating::parse("25"), Ok(ChallengeRating::new(25)));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(
            ChallengeRating::parse("five"),
            Err(TreasureError::RatingNotNumeric("five".to_string()))
        );
        assert!(ChallengeRating::parse("").is_err());
        assert!(ChallengeRating::parse("2.5").is_err());
    }

    #[test]
    fn parse_rejects_below_one() {
        assert_eq!(
            ChallengeRating::parse("0"),
            Err(TreasureError::RatingTooLow(0))
        );
        assert_eq!(
            ChallengeRating::parse("-3"),
            Err(TreasureError::RatingTooLow(-3))
        );
    }

    #[test]
    fn clamping() {
        assert_eq!(ChallengeRating::new(0).value(), 1);
        assert_eq!(ChallengeRating::new(25).value(), 25);
        assert_eq!(ChallengeRating::new(25).clamped(), 20);
        assert_eq!(ChallengeRating::new(7).clamped(), 7);
    }

    #[test]
    fn display_shows_raw_value() {
        assert_eq!(ChallengeRating::new(25).to_string(), "25");
    }
}
