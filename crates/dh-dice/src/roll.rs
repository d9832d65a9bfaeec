//! Roll results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::notation::DiceExpression;

/// The outcome of rolling a dice expression.
///
/// Individual draws are stored in roll order. Sums are derived on demand
/// so a result can never disagree with its rolls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollResult {
    /// The expression that was rolled.
    pub expression: DiceExpression,
    /// Individual die values, in draw order.
    pub rolls: Vec<u32>,
}

impl RollResult {
    /// Sum of the individual rolls, before the modifier.
    pub fn sum(&self) -> u32 {
        self.rolls.iter().sum()
    }

    /// Final total: roll sum plus the expression's modifier.
    pub fn total(&self) -> i64 {
        i64::from(self.sum()) + i64::from(self.expression.modifier)
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", values.join(", "))?;
        if self.expression.modifier != 0 {
            write!(f, " {:+}", self.expression.modifier)?;
        }
        write!(f, " = {}", self.total())
    }
}
