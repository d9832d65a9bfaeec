//! Magic item generation.
//!
//! A hoard that passes the items gate draws a tier-banded number of
//! items. Each item rolls a category from a cumulative-probability table
//! (low tiers see only consumables and wondrous items) and hands off to
//! the category's sub-generator.

pub mod armor;
pub mod catalog;
pub mod weapon;

use rand::Rng;
use rand::rngs::StdRng;

use crate::item::GeneratedItem;
use crate::pick;
use crate::rating::ChallengeRating;
use crate::tier::TierEntry;

/// A magic item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Enhanced weapon, possibly branded.
    Weapon,
    /// Enhanced armor or shield.
    Armor,
    /// Single-use potion.
    Potion,
    /// Single-use spell scroll.
    Scroll,
    /// Charged wand.
    Wand,
    /// Wondrous item (cloaks, boots, bags, ...).
    Wondrous,
    /// Magic ring.
    Ring,
}

const LOW_CATEGORIES: &[(f64, Category)] = &[
    (0.40, Category::Potion),
    (0.80, Category::Scroll),
    (1.00, Category::Wondrous),
];

const MID_LOW_CATEGORIES: &[(f64, Category)] = &[
    (0.20, Category::Weapon),
    (0.35, Category::Armor),
    (0.55, Category::Potion),
    (0.70, Category::Scroll),
    (0.85, Category::Wondrous),
    (1.00, Category::Ring),
];

const MID_CATEGORIES: &[(f64, Category)] = &[
    (0.25, Category::Weapon),
    (0.45, Category::Armor),
    (0.55, Category::Potion),
    (0.65, Category::Scroll),
    (0.75, Category::Wand),
    (0.87, Category::Wondrous),
    (1.00, Category::Ring),
];

const HIGH_CATEGORIES: &[(f64, Category)] = &[
    (0.30, Category::Weapon),
    (0.50, Category::Armor),
    (0.55, Category::Potion),
    (0.60, Category::Scroll),
    (0.70, Category::Wand),
    (0.85, Category::Wondrous),
    (1.00, Category::Ring),
];

/// Category odds for a tier: consumables dominate early, permanent items
/// take over past the midgame.
fn category_table(tier: u32) -> &'static [(f64, Category)] {
    match tier {
        ..=4 => LOW_CATEGORIES,
        ..=8 => MID_LOW_CATEGORIES,
        ..=12 => MID_CATEGORIES,
        _ => HIGH_CATEGORIES,
    }
}

/// Item count weight lists per tier band.
fn count_weights(tier: u32) -> &'static [u32] {
    match tier {
        ..=5 => &[1],
        ..=10 => &[1, 1, 2],
        ..=15 => &[1, 2, 2, 3],
        _ => &[2, 2, 3, 3, 4],
    }
}

/// Generate the magic items for a hoard.
///
/// The gate draw happens even when the tier's items chance is zero.
pub fn generate_magic_items(rating: ChallengeRating, rng: &mut StdRng) -> Vec<GeneratedItem> {
    let entry = TierEntry::for_rating(rating);
    let tier = rating.clamped();
    if rng.random::<f64>() > entry.items_chance {
        return Vec::new();
    }

    let count = *pick::uniform(rng, count_weights(tier));
    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let item = match pick::weighted(rng, category_table(tier)) {
            Category::Weapon => weapon::generate_weapon(tier, rng),
            Category::Armor => armor::generate_armor(tier, rng),
            Category::Potion => catalog::generate_potion(tier, rng),
            Category::Scroll => catalog::generate_scroll(tier, rng),
            Category::Wand => catalog::generate_wand(tier, rng),
            Category::Wondrous => catalog::generate_wondrous(tier, rng),
            Category::Ring => catalog::generate_ring(tier, rng),
        };
        items.push(item);
    }
    items
}
