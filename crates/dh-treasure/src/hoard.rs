//! Hoard assembly.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::coins::{self, CoinPurse};
use crate::goods;
use crate::item::GeneratedItem;
use crate::magic;
use crate::rating::ChallengeRating;

/// A complete treasure hoard for one encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasureHoard {
    /// The rating the hoard was generated for, as entered.
    pub rating: ChallengeRating,
    /// Coin amounts per denomination.
    pub coins: CoinPurse,
    /// Gems and art objects.
    pub goods: Vec<GeneratedItem>,
    /// Magic items.
    pub items: Vec<GeneratedItem>,
}

impl TreasureHoard {
    /// Generate a hoard: coins, then goods, then magic items.
    pub fn generate(rating: ChallengeRating, rng: &mut StdRng) -> Self {
        Self {
            rating,
            coins: coins::generate_coins(rating, rng),
            goods: goods::generate_goods(rating, rng),
            items: magic::generate_magic_items(rating, rng),
        }
    }

    /// Total value in gold pieces.
    ///
    /// Each denomination converts with floating-point arithmetic; the sum
    /// truncates once at the end, never per denomination.
    pub fn total_value(&self) -> u64 {
        let coin_value: f64 = self
            .coins
            .iter()
            .map(|(denomination, amount)| (*amount as f64) * denomination.gp_value())
            .sum();
        let goods_value: u64 = self.goods.iter().map(|g| g.price).sum();
        let items_value: u64 = self.items.iter().map(|i| i.price).sum();
        (coin_value + (goods_value + items_value) as f64) as u64
    }

    /// True when the hoard holds nothing at all.
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty() && self.goods.is_empty() && self.items.is_empty()
    }
}
