//! Sampling helpers shared by the generators.
//!
//! All helpers take the random source explicitly and consume a fixed number
//! of draws per call shape, which keeps generation reproducible.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick one entry from a weighted table.
///
/// Weights need not sum to one. A roll past the cumulative total (only
/// possible through float rounding) falls back to the last entry.
pub fn pick_weighted<R, T>(rng: &mut R, table: &[(T, f64)]) -> Option<T>
where
    R: Rng + ?Sized,
    T: Copy,
{
    let total: f64 = table.iter().map(|&(_, weight)| weight).sum();
    let roll = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for &(item, weight) in table {
        cumulative += weight;
        if roll < cumulative {
            return Some(item);
        }
    }
    table.last().map(|&(item, _)| item)
}

/// Pick one tag uniformly from a catalog.
pub fn pick_tag<R: Rng + ?Sized>(rng: &mut R, catalog: &[&'static str]) -> String {
    catalog
        .choose(rng)
        .map_or_else(String::new, |tag| (*tag).to_owned())
}

/// Pick one value uniformly from an enum's variant list.
pub fn pick_variant<R, T>(rng: &mut R, variants: &[T], fallback: T) -> T
where
    R: Rng + ?Sized,
    T: Copy,
{
    variants.choose(rng).copied().unwrap_or(fallback)
}

/// Sample `min..=max` distinct tags (capped at the catalog size).
pub fn sample_tags<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &[&'static str],
    min: usize,
    max: usize,
) -> Vec<String> {
    let count = rng.random_range(min..=max).min(catalog.len());
    catalog
        .choose_multiple(rng, count)
        .map(|tag| (*tag).to_owned())
        .collect()
}

/// Uniform draw from the closed interval `[low, high]`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    rng.random_range(low..=high)
}

/// Clamp to the unit interval.
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
