//! Dice types and notation parsing.
//!
//! Standard notation is `XdY+Z`: X dice with Y sides each, plus a flat
//! modifier. Count and modifier are optional, so "d20" rolls a single die.
//! Parsing is anchored at both ends; anything that is not count, `d`,
//! sides, and an optional signed modifier is rejected.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::DiceError;
use crate::roll::RollResult;

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a non-standard number of sides.
    Custom(u32),
}

/// The seven standard polyhedral dice.
pub const STANDARD_DICE: [Die; 7] = [
    Die::D4,
    Die::D6,
    Die::D8,
    Die::D10,
    Die::D12,
    Die::D20,
    Die::D100,
];

impl Die {
    /// Map a side count onto a die, using named variants for the standard
    /// sizes.
    pub fn new(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// True for the seven standard polyhedral sizes.
    pub fn is_standard(self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Maximum number of dice allowed in a single expression.
pub const MAX_DICE: u64 = 100;

/// A parsed dice expression: count, die, and flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpression {
    /// How many dice to roll (1-100 when parsed from notation).
    pub count: u32,
    /// The die to roll.
    pub die: Die,
    /// Flat modifier added to the roll sum.
    pub modifier: i32,
}

impl DiceExpression {
    /// Create an expression directly, without the notation count limit.
    pub fn new(count: u32, die: Die, modifier: i32) -> Self {
        Self {
            count,
            die,
            modifier,
        }
    }

    /// Roll the expression: `count` independent uniform draws in
    /// `[1, sides]`, stored in draw order.
    pub fn roll(&self, rng: &mut StdRng) -> RollResult {
        let rolls = (0..self.count)
            .map(|_| rng.random_range(1..=self.die.sides()))
            .collect();
        RollResult {
            expression: *self,
            rolls,
        }
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Whitespace inside the notation is tolerated ("2d6 + 3").
        let notation: String = s.trim().to_lowercase().split_whitespace().collect();
        let invalid = || DiceError::InvalidNotation(s.trim().to_string());

        let (count_part, rest) = notation.split_once('d').ok_or_else(invalid)?;
        let (sides_part, modifier_part) = match rest.find(['+', '-']) {
            Some(at) => (&rest[..at], Some(&rest[at..])),
            None => (rest, None),
        };

        let count = if count_part.is_empty() {
            1
        } else {
            parse_digits(count_part).ok_or_else(invalid)?
        };
        if !(1..=MAX_DICE).contains(&count) {
            return Err(DiceError::InvalidDiceCount(count));
        }

        let sides = parse_digits(sides_part)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(invalid)?;
        if sides == 0 {
            return Err(invalid());
        }

        let modifier = match modifier_part {
            Some(m) if m.len() > 1 && m.as_bytes()[1..].iter().all(u8::is_ascii_digit) => {
                m.parse::<i32>().map_err(|_| invalid())?
            }
            Some(_) => return Err(invalid()),
            None => 0,
        };

        Ok(Self {
            count: count as u32,
            die: Die::new(sides),
            modifier,
        })
    }
}

/// Parse a non-empty all-digit field. Values beyond `u64::MAX` saturate,
/// which the count range check then rejects.
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse::<u64>().unwrap_or(u64::MAX))
}
