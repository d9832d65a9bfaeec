//! Coin generation and denominations.
//!
//! A tier's coin dice produce a base gold pool which is then spread
//! across denominations: low tiers pay out mostly copper and silver,
//! high tiers shift to gold and platinum. The band breakpoints are fixed
//! contract values.

use std::collections::BTreeMap;
use std::fmt;

use dh_dice::{DiceExpression, Die};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::rating::ChallengeRating;
use crate::tier::TierEntry;

/// A coin denomination, ordered from least to most valuable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Denomination {
    /// Copper pieces, 1/100 gp.
    #[serde(rename = "cp")]
    Copper,
    /// Silver pieces, 1/10 gp.
    #[serde(rename = "sp")]
    Silver,
    /// Gold pieces.
    #[serde(rename = "gp")]
    Gold,
    /// Platinum pieces, 10 gp each.
    #[serde(rename = "pp")]
    Platinum,
}

impl Denomination {
    /// All denominations, most valuable first.
    pub const DISPLAY_ORDER: [Self; 4] = [Self::Platinum, Self::Gold, Self::Silver, Self::Copper];

    /// Value of one coin in gold pieces.
    pub fn gp_value(self) -> f64 {
        match self {
            Self::Copper => 0.01,
            Self::Silver => 0.1,
            Self::Gold => 1.0,
            Self::Platinum => 10.0,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copper => write!(f, "cp"),
            Self::Silver => write!(f, "sp"),
            Self::Gold => write!(f, "gp"),
            Self::Platinum => write!(f, "pp"),
        }
    }
}

/// Coin amounts per denomination. Zero amounts are never stored.
pub type CoinPurse = BTreeMap<Denomination, u64>;

/// Generate the coin portion of a hoard.
pub fn generate_coins(rating: ChallengeRating, rng: &mut StdRng) -> CoinPurse {
    let entry = TierEntry::for_rating(rating);
    let tier = rating.clamped();
    let pool = roll_coins(entry.coin_dice, entry.coin_die, rng) * entry.coin_multiplier;

    let mut coins = CoinPurse::new();
    if tier <= 3 {
        insert(&mut coins, Denomination::Copper, roll_coins(3, Die::D6, rng) * 10);
        insert(&mut coins, Denomination::Silver, roll_coins(2, Die::D6, rng) * 10);
        insert(&mut coins, Denomination::Gold, pool / 10);
    } else if tier <= 6 {
        insert(&mut coins, Denomination::Silver, roll_coins(2, Die::D8, rng) * 10);
        insert(&mut coins, Denomination::Gold, pool / 5);
    } else if tier <= 10 {
        insert(&mut coins, Denomination::Gold, pool);
    } else {
        let platinum = pool / 20;
        insert(&mut coins, Denomination::Platinum, platinum);
        insert(&mut coins, Denomination::Gold, pool - platinum * 10);
    }
    coins
}

/// Sum of `count` rolls of `die`, as a coin quantity.
fn roll_coins(count: u32, die: Die, rng: &mut StdRng) -> u64 {
    u64::from(DiceExpression::new(count, die, 0).roll(rng).sum())
}

fn insert(coins: &mut CoinPurse, denomination: Denomination, amount: u64) {
    if amount > 0 {
        coins.insert(denomination, amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn coins_for(cr: u32, seed: u64) -> CoinPurse {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_coins(ChallengeRating::new(cr), &mut rng)
    }

    #[test]
    fn low_tier_pays_copper_silver_gold() {
        for seed in 0..50 {
            let coins = coins_for(1, seed);
            assert!(coins.contains_key(&Denomination::Copper));
            assert!(coins.contains_key(&Denomination::Silver));
            assert!(coins.contains_key(&Denomination::Gold));
            assert!(!coins.contains_key(&Denomination::Platinum));
            assert!(coins.values().all(|amount| *amount > 0));
        }
    }

    #[test]
    fn mid_low_tier_pays_silver_and_gold() {
        for seed in 0..50 {
            let coins = coins_for(5, seed);
            assert_eq!(
                coins.keys().copied().collect::<Vec<_>>(),
                vec![Denomination::Silver, Denomination::Gold]
            );
        }
    }

    #[test]
    fn mid_tier_pays_gold_only() {
        for seed in 0..50 {
            let coins = coins_for(8, seed);
            assert_eq!(
                coins.keys().copied().collect::<Vec<_>>(),
                vec![Denomination::Gold]
            );
        }
    }

    #[test]
    fn high_tier_pays_gold_and_platinum() {
        for seed in 0..50 {
            let coins = coins_for(15, seed);
            assert!(coins.contains_key(&Denomination::Platinum));
            assert!(coins.contains_key(&Denomination::Gold));
            assert!(!coins.contains_key(&Denomination::Copper));
        }
    }

    #[test]
    fn out_of_range_rating_matches_clamped_bound() {
        for seed in 0..20 {
            assert_eq!(coins_for(25, seed), coins_for(20, seed));
            assert_eq!(coins_for(0, seed), coins_for(1, seed));
        }
    }

    #[test]
    fn deterministic_with_seed() {
        assert_eq!(coins_for(12, 42), coins_for(12, 42));
    }

    #[test]
    fn gp_ladder() {
        assert_eq!(Denomination::Copper.gp_value(), 0.01);
        assert_eq!(Denomination::Silver.gp_value(), 0.1);
        assert_eq!(Denomination::Gold.gp_value(), 1.0);
        assert_eq!(Denomination::Platinum.gp_value(), 10.0);
    }
}
