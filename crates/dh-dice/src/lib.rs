//! Dice notation parsing and rolling for Drachenhort.
//!
//! Parses standard tabletop notation ("2d6", "1d20+5", "4d6-2") into
//! [`DiceExpression`] values and rolls them against an injected random
//! source, so every roll is reproducible under a seeded generator.

pub mod error;
pub mod notation;
pub mod roll;

pub use error::{DiceError, DiceResult};
pub use notation::{DiceExpression, Die, MAX_DICE, STANDARD_DICE};
pub use roll::RollResult;
