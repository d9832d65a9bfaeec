//! Magic weapon generation.
//!
//! Weapons carry an enhancement bonus and possibly one or more brands
//! (named magical properties). A brand adds a flat gold cost plus an
//! enhancement-equivalent that feeds the quadratic price term.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::item::GeneratedItem;
use crate::pick;

/// Base price of a masterwork martial weapon, in gp.
const WEAPON_BASE_PRICE: u64 = 350;

/// Gold per squared point of total enhancement.
const ENHANCEMENT_PRICE: u64 = 2000;

/// A named magical weapon property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    /// Property name, e.g. "flaming".
    pub name: &'static str,
    /// Enhancement-equivalent that feeds the quadratic price term.
    pub equivalent: u32,
    /// Flat gold cost on top of the enhancement term.
    pub cost: u64,
}

const fn brand(name: &'static str, equivalent: u32, cost: u64) -> Brand {
    Brand {
        name,
        equivalent,
        cost,
    }
}

/// All weapon brands.
pub const BRANDS: [Brand; 14] = [
    brand("flaming", 1, 8000),
    brand("frost", 1, 8000),
    brand("shock", 1, 8000),
    brand("keen", 1, 8000),
    brand("thundering", 1, 8000),
    brand("anarchic", 2, 18000),
    brand("axiomatic", 2, 18000),
    brand("holy", 2, 18000),
    brand("unholy", 2, 18000),
    brand("flaming burst", 2, 18000),
    brand("icy burst", 2, 18000),
    brand("shocking burst", 2, 18000),
    brand("wounding", 2, 18000),
    brand("vorpal", 5, 50000),
];

/// Weapon type names.
const WEAPON_TYPES: &[&str] = &[
    "longsword",
    "greatsword",
    "bastard sword",
    "rapier",
    "scimitar",
    "shortsword",
    "dagger",
    "battleaxe",
    "greataxe",
    "handaxe",
    "warhammer",
    "light hammer",
    "heavy mace",
    "light mace",
    "morningstar",
    "heavy flail",
    "light flail",
    "spear",
    "longspear",
    "shortspear",
    "composite longbow",
    "longbow",
    "composite shortbow",
    "shortbow",
    "light crossbow",
    "heavy crossbow",
];

/// Price of a weapon with the given enhancement bonus and brands.
///
/// Base price plus the squared total enhancement (base bonus plus every
/// brand's equivalent) times 2000 gp, plus each brand's flat cost.
pub fn weapon_price(enhancement: u32, brands: &[Brand]) -> u64 {
    let total = u64::from(enhancement)
        + brands
            .iter()
            .map(|b| u64::from(b.equivalent))
            .sum::<u64>();
    let flat: u64 = brands.iter().map(|b| b.cost).sum();
    WEAPON_BASE_PRICE + total * total * ENHANCEMENT_PRICE + flat
}

/// Brands with an enhancement-equivalent low enough to stack.
fn lesser_brands() -> Vec<Brand> {
    BRANDS.iter().copied().filter(|b| b.equivalent <= 2).collect()
}

/// Generate a magic weapon for a clamped tier.
pub fn generate_weapon(tier: u32, rng: &mut StdRng) -> GeneratedItem {
    let (enhancement, brands) = roll_enhancement(tier, rng);
    let weapon_type = *pick::uniform(rng, WEAPON_TYPES);

    let mut description = format!("+{enhancement}");
    for b in &brands {
        description.push(' ');
        description.push_str(b.name);
    }
    description.push(' ');
    description.push_str(weapon_type);

    GeneratedItem::new(description, weapon_price(enhancement, &brands))
}

fn roll_enhancement(tier: u32, rng: &mut StdRng) -> (u32, Vec<Brand>) {
    match tier {
        ..=5 => (1, Vec::new()),
        ..=8 => {
            let enhancement = *pick::uniform(rng, &[1u32, 1, 1, 2]);
            let brands = if rng.random::<f64>() < 0.3 {
                vec![*pick::uniform(rng, &BRANDS)]
            } else {
                Vec::new()
            };
            (enhancement, brands)
        }
        ..=12 => {
            let enhancement = *pick::uniform(rng, &[1u32, 2, 2, 2]);
            let brands = if rng.random::<f64>() < 0.5 {
                vec![*pick::uniform(rng, &BRANDS)]
            } else {
                Vec::new()
            };
            (enhancement, brands)
        }
        ..=16 => {
            let enhancement = *pick::uniform(rng, &[2u32, 2, 3, 3]);
            let brands = vec![*pick::uniform(rng, &lesser_brands())];
            (enhancement, brands)
        }
        _ => {
            let enhancement = *pick::uniform(rng, &[3u32, 3, 4, 4, 5]);
            let how_many = *pick::uniform(rng, &[1usize, 1, 2]);
            let brands = lesser_brands()
                .choose_multiple(rng, how_many)
                .copied()
                .collect();
            (enhancement, brands)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn price_without_brands_is_quadratic() {
        assert_eq!(weapon_price(1, &[]), 350 + 2000);
        assert_eq!(weapon_price(2, &[]), 350 + 8000);
        assert_eq!(weapon_price(5, &[]), 350 + 50_000);
    }

    #[test]
    fn brand_adds_equivalent_and_flat_cost() {
        let flaming = BRANDS[0];
        // +1 flaming: total enhancement 2, plus the 8000 gp flat cost.
        assert_eq!(weapon_price(1, &[flaming]), 350 + 8000 + 8000);

        let vorpal = BRANDS[13];
        // +3 vorpal: total enhancement 8.
        assert_eq!(weapon_price(3, &[vorpal]), 350 + 128_000 + 50_000);
    }

    #[test]
    fn low_tier_weapons_are_plain_plus_one() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let weapon = generate_weapon(4, &mut rng);
            assert!(weapon.description.starts_with("+1 "));
            assert_eq!(weapon.price, 2350);
        }
    }

    #[test]
    fn high_tier_weapons_only_stack_lesser_brands() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let weapon = generate_weapon(20, &mut rng);
            assert!(!weapon.description.contains("vorpal"));
        }
    }

    #[test]
    fn description_names_a_weapon_type() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let weapon = generate_weapon(10, &mut rng);
            assert!(
                WEAPON_TYPES
                    .iter()
                    .any(|name| weapon.description.ends_with(name))
            );
        }
    }

    #[test]
    fn lesser_brands_exclude_vorpal() {
        let lesser = lesser_brands();
        assert_eq!(lesser.len(), 13);
        assert!(lesser.iter().all(|b| b.equivalent <= 2));
    }
}
