//! Magic armor generation.

use rand::rngs::StdRng;

use crate::item::GeneratedItem;
use crate::pick;

/// Base price of masterwork armor, in gp.
const ARMOR_BASE_PRICE: u64 = 150;

/// Gold per squared point of enhancement.
const ENHANCEMENT_PRICE: u64 = 1000;

/// Armor and shield type names.
const ARMOR_TYPES: &[&str] = &[
    "chain shirt",
    "chainmail",
    "breastplate",
    "scale mail",
    "half-plate",
    "full plate",
    "leather armor",
    "studded leather",
    "hide armor",
    "light steel shield",
    "heavy steel shield",
    "tower shield",
];

/// Enhancement weight lists per tier band.
fn enhancement_weights(tier: u32) -> &'static [u32] {
    match tier {
        ..=6 => &[1],
        ..=10 => &[1, 1, 2],
        ..=14 => &[2, 2, 3],
        _ => &[3, 4, 5],
    }
}

/// Generate magic armor for a clamped tier.
pub fn generate_armor(tier: u32, rng: &mut StdRng) -> GeneratedItem {
    let enhancement = *pick::uniform(rng, enhancement_weights(tier));
    let armor_type = *pick::uniform(rng, ARMOR_TYPES);
    let price =
        ARMOR_BASE_PRICE + u64::from(enhancement) * u64::from(enhancement) * ENHANCEMENT_PRICE;
    GeneratedItem::new(format!("+{enhancement} {armor_type}"), price)
}
