//! Priced catalogs: potions, scrolls, wands, rings, wondrous items.
//!
//! Each catalog is filtered to a tier-derived ceiling (price, or spell
//! level for scrolls), then one entry is drawn uniformly. The shipped
//! tables always leave at least one candidate at the lowest ceiling.

use rand::rngs::StdRng;

use crate::item::GeneratedItem;
use crate::pick;

/// Charges on a freshly generated wand.
const WAND_CHARGES: u32 = 50;

#[derive(Debug, Clone, Copy)]
struct CatalogEntry {
    name: &'static str,
    price: u64,
}

const fn entry(name: &'static str, price: u64) -> CatalogEntry {
    CatalogEntry { name, price }
}

#[derive(Debug, Clone, Copy)]
struct ScrollEntry {
    name: &'static str,
    price: u64,
    level: u32,
}

const fn scroll(name: &'static str, price: u64, level: u32) -> ScrollEntry {
    ScrollEntry { name, price, level }
}

const POTIONS: &[CatalogEntry] = &[
    entry("cure light wounds", 50),
    entry("cure moderate wounds", 300),
    entry("cure serious wounds", 750),
    entry("cure critical wounds", 1000),
    entry("invisibility", 300),
    entry("fly", 750),
    entry("haste", 750),
    entry("heroism", 750),
    entry("neutralize poison", 1000),
    entry("resist energy", 300),
    entry("lesser restoration", 300),
    entry("protection from arrows", 300),
    entry("bull's strength", 300),
    entry("cat's grace", 300),
    entry("bear's endurance", 300),
];

const SCROLLS: &[ScrollEntry] = &[
    scroll("magic missile", 25, 1),
    scroll("shield", 25, 1),
    scroll("mage armor", 25, 1),
    scroll("identify", 25, 1),
    scroll("cure light wounds", 25, 1),
    scroll("bless", 25, 1),
    scroll("invisibility", 150, 2),
    scroll("knock", 150, 2),
    scroll("levitate", 150, 2),
    scroll("cure moderate wounds", 150, 2),
    scroll("fireball", 375, 3),
    scroll("haste", 375, 3),
    scroll("fly", 375, 3),
    scroll("cure serious wounds", 375, 3),
    scroll("greater invisibility", 700, 4),
    scroll("dimension door", 700, 4),
];

const WANDS: &[CatalogEntry] = &[
    entry("magic missile", 750),
    entry("cure light wounds", 750),
    entry("shield", 750),
    entry("burning hands", 750),
    entry("cure moderate wounds", 4500),
    entry("fireball", 11250),
];

const RINGS: &[CatalogEntry] = &[
    entry("ring of protection +1", 2000),
    entry("ring of protection +2", 8000),
    entry("ring of protection +3", 18000),
    entry("ring of feather falling", 2200),
    entry("ring of swimming", 2500),
    entry("ring of climbing", 2500),
    entry("ring of jumping", 2500),
    entry("ring of sustenance", 2500),
    entry("ring of counterspells", 4000),
    entry("ring of mind shielding", 8000),
    entry("ring of invisibility", 20000),
];

const WONDROUS: &[CatalogEntry] = &[
    entry("bag of holding (type I)", 2500),
    entry("bag of holding (type II)", 5000),
    entry("cloak of resistance +1", 1000),
    entry("cloak of resistance +2", 4000),
    entry("cloak of resistance +3", 9000),
    entry("cloak of elvenkind", 2500),
    entry("cloak of the bat", 26000),
    entry("boots of elvenkind", 2500),
    entry("boots of speed", 12000),
    entry("boots of teleportation", 49000),
    entry("bracers of armor +1", 1000),
    entry("bracers of armor +2", 4000),
    entry("bracers of armor +3", 9000),
    entry("amulet of natural armor +1", 2000),
    entry("amulet of natural armor +2", 8000),
    entry("amulet of natural armor +3", 18000),
    entry("gloves of dexterity +2", 4000),
    entry("gauntlets of ogre power", 4000),
    entry("headband of intellect +2", 4000),
    entry("periapt of wisdom +2", 4000),
    entry("belt of giant strength +2", 4000),
    entry("robe of the archmagi", 75000),
    entry("robe of stars", 58000),
    entry("portable hole", 20000),
    entry("rope of climbing", 3000),
    entry("rope of entanglement", 21000),
    entry("handy haversack", 2000),
    entry("everburning torch", 110),
];

/// Uniform pick over catalog entries priced at or below the ceiling.
fn pick_priced(
    rng: &mut StdRng,
    table: &'static [CatalogEntry],
    ceiling: u64,
) -> &'static CatalogEntry {
    let candidates: Vec<&CatalogEntry> = table.iter().filter(|e| e.price <= ceiling).collect();
    *pick::uniform(rng, &candidates)
}

/// Generate a potion for a clamped tier.
pub fn generate_potion(tier: u32, rng: &mut StdRng) -> GeneratedItem {
    let ceiling = match tier {
        ..=5 => 300,
        ..=10 => 750,
        _ => u64::MAX,
    };
    let potion = pick_priced(rng, POTIONS, ceiling);
    GeneratedItem::new(format!("Potion of {}", potion.name), potion.price)
}

/// Generate a scroll for a clamped tier.
pub fn generate_scroll(tier: u32, rng: &mut StdRng) -> GeneratedItem {
    let max_level = match tier {
        ..=4 => 1,
        ..=8 => 2,
        ..=12 => 3,
        _ => 4,
    };
    let candidates: Vec<&ScrollEntry> = SCROLLS.iter().filter(|s| s.level <= max_level).collect();
    let scroll = *pick::uniform(rng, &candidates);
    GeneratedItem::new(format!("Scroll of {}", scroll.name), scroll.price)
}

/// Generate a wand for a clamped tier.
pub fn generate_wand(tier: u32, rng: &mut StdRng) -> GeneratedItem {
    let ceiling = match tier {
        ..=8 => 750,
        ..=12 => 4500,
        _ => u64::MAX,
    };
    let wand = pick_priced(rng, WANDS, ceiling);
    GeneratedItem::new(
        format!("Wand of {} ({WAND_CHARGES} charges)", wand.name),
        wand.price,
    )
}

/// Generate a ring for a clamped tier.
pub fn generate_ring(tier: u32, rng: &mut StdRng) -> GeneratedItem {
    let ceiling = match tier {
        ..=8 => 4000,
        ..=14 => 10000,
        _ => u64::MAX,
    };
    let ring = pick_priced(rng, RINGS, ceiling);
    GeneratedItem::new(ring.name, ring.price)
}

/// Generate a wondrous item for a clamped tier.
pub fn generate_wondrous(tier: u32, rng: &mut StdRng) -> GeneratedItem {
    let ceiling = match tier {
        ..=6 => 2500,
        ..=10 => 5000,
        ..=14 => 15000,
        _ => u64::MAX,
    };
    let item = pick_priced(rng, WONDROUS, ceiling);
    GeneratedItem::new(item.name, item.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn potions_respect_tier_ceiling() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(generate_potion(3, &mut rng).price <= 300);
            assert!(generate_potion(8, &mut rng).price <= 750);
        }
    }

    #[test]
    fn low_tier_scrolls_are_first_level() {
        // Level 1 scrolls all cost 25 gp.
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(generate_scroll(2, &mut rng).price, 25);
        }
    }

    #[test]
    fn wands_carry_fifty_charges() {
        let mut rng = StdRng::seed_from_u64(5);
        let wand = generate_wand(10, &mut rng);
        assert!(wand.description.starts_with("Wand of "));
        assert!(wand.description.ends_with("(50 charges)"));
    }

    #[test]
    fn wand_prices_respect_tier_ceiling() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(generate_wand(6, &mut rng).price, 750);
            assert!(generate_wand(11, &mut rng).price <= 4500);
        }
    }

    #[test]
    fn rings_respect_tier_ceiling() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(generate_ring(7, &mut rng).price <= 4000);
            assert!(generate_ring(12, &mut rng).price <= 10000);
        }
    }

    #[test]
    fn wondrous_items_respect_tier_ceiling() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(generate_wondrous(4, &mut rng).price <= 2500);
            assert!(generate_wondrous(9, &mut rng).price <= 5000);
            assert!(generate_wondrous(13, &mut rng).price <= 15000);
        }
    }

    #[test]
    fn every_catalog_has_low_tier_candidates() {
        assert!(POTIONS.iter().any(|e| e.price <= 300));
        assert!(SCROLLS.iter().any(|s| s.level <= 1));
        assert!(WANDS.iter().any(|e| e.price <= 750));
        assert!(RINGS.iter().any(|e| e.price <= 4000));
        assert!(WONDROUS.iter().any(|e| e.price <= 2500));
    }
}
