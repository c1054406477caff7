//! Biome flavor names.
//!
//! One of four strategies is chosen uniformly per name. Names never feed
//! into any identity-bearing field.

use rand::Rng;

use crate::catalog::{
    NAME_CONNECTORS, NAME_DESCRIPTORS, NAME_ELEMENTS, NAME_PREFIXES, NAME_SUFFIXES,
    SPECIAL_FEATURES,
};
use crate::sample::pick_tag;

/// Naming strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStrategy {
    /// Prefix glued to a suffix (`Azuremire`).
    Simple,
    /// Prefix, connector phrase, descriptor, suffix (`Jade of Lost fen`).
    Compound,
    /// A special feature in title case plus a suffix (`Singing Rocks vale`).
    Descriptive,
    /// An element plus `-Touched` and a suffix (`Time-Touched grove`).
    Mystical,
}

impl NameStrategy {
    /// Every strategy.
    pub const ALL: &'static [Self] = &[
        Self::Simple,
        Self::Compound,
        Self::Descriptive,
        Self::Mystical,
    ];
}

/// Generate a biome name with a uniformly chosen strategy.
pub fn generate_biome_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let index = rng.random_range(0..NameStrategy::ALL.len());
    let strategy = NameStrategy::ALL
        .get(index)
        .copied()
        .unwrap_or(NameStrategy::Simple);
    name_with_strategy(rng, strategy)
}

/// Generate a biome name with a fixed strategy.
pub fn name_with_strategy<R: Rng + ?Sized>(rng: &mut R, strategy: NameStrategy) -> String {
    match strategy {
        NameStrategy::Simple => {
            let prefix = pick_tag(rng, NAME_PREFIXES);
            let suffix = pick_tag(rng, NAME_SUFFIXES);
            format!("{prefix}{suffix}")
        }
        NameStrategy::Compound => {
            let prefix = pick_tag(rng, NAME_PREFIXES);
            let connector = pick_tag(rng, NAME_CONNECTORS);
            let descriptor = pick_tag(rng, NAME_DESCRIPTORS);
            let suffix = pick_tag(rng, NAME_SUFFIXES);
            format!("{prefix}{connector}{descriptor} {suffix}")
        }
        NameStrategy::Descriptive => {
            let feature = title_case(&pick_tag(rng, SPECIAL_FEATURES));
            let suffix = pick_tag(rng, NAME_SUFFIXES);
            format!("{feature} {suffix}")
        }
        NameStrategy::Mystical => {
            let element = pick_tag(rng, NAME_ELEMENTS);
            let suffix = pick_tag(rng, NAME_SUFFIXES);
            format!("{element}-Touched {suffix}")
        }
    }
}

/// `snake_case` tag to space-separated title case.
fn title_case(tag: &str) -> String {
    tag.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
