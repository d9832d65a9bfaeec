//! Treasure hoard generation for Drachenhort.
//!
//! Builds complete hoards — coins, gems and art objects, magic items —
//! from static tables keyed by challenge rating. Generation is a cascade
//! of conditional weighted draws against an injected random source, so a
//! seeded generator reproduces a hoard exactly.

pub mod coins;
pub mod error;
pub mod goods;
pub mod hoard;
pub mod item;
pub mod magic;
pub mod pick;
pub mod rating;
pub mod tier;

pub use coins::{CoinPurse, Denomination, generate_coins};
pub use error::{TreasureError, TreasureResult};
pub use goods::generate_goods;
pub use hoard::TreasureHoard;
pub use item::GeneratedItem;
pub use magic::generate_magic_items;
pub use rating::ChallengeRating;
pub use tier::TierEntry;
