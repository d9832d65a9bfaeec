//! Random selection primitives shared by the generators.
//!
//! Every weighted draw in the treasure tables goes through one of these
//! helpers, so the tie-break rule lives in a single place: one `[0,1)`
//! draw, bands tested in ascending order, inclusive upper bound, first
//! match wins.

use rand::Rng;
use rand::rngs::StdRng;

/// Uniformly select one entry from a slice.
///
/// Panics if `entries` is empty; the static tables fed through here never
/// are.
pub fn uniform<'a, T>(rng: &mut StdRng, entries: &'a [T]) -> &'a T {
    &entries[rng.random_range(0..entries.len())]
}

/// Select from cumulative-probability bands.
///
/// `bands` holds ascending upper bounds; the final band is expected to
/// carry 1.0 and backstops any float edge case.
pub fn weighted<'a, T>(rng: &mut StdRng, bands: &'a [(f64, T)]) -> &'a T {
    let draw: f64 = rng.random();
    for (bound, value) in bands {
        if draw <= *bound {
            return value;
        }
    }
    &bands[bands.len() - 1].1
}
