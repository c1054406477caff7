//! Content-addressed identifiers.
//!
//! A biome id is a digest of the characteristics that define the biome
//! conceptually: archetype, climate summary, and special features. The
//! flavor name is excluded, so two biomes that differ only by name collapse
//! to the same id.

use sha2::{Digest, Sha256};
use starforge_types::{BiomeId, BiomeType, Climate};

/// Number of digest bytes kept for a biome id (12 hex characters).
pub const BIOME_ID_BYTES: usize = 6;

/// Hex-encoded SHA-256 prefix of `input`, `bytes` bytes long.
pub fn short_hash(input: &str, bytes: usize) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let prefix: Vec<u8> = digest.iter().take(bytes).copied().collect();
    hex::encode(prefix)
}

/// Canonical serialization of a biome's defining characteristics.
///
/// Feature order does not matter: the tags are sorted first.
pub fn canonical_biome_key(
    base_type: BiomeType,
    climate: &Climate,
    special_features: &[String],
) -> String {
    let mut features: Vec<&str> = special_features.iter().map(String::as_str).collect();
    features.sort_unstable();
    format!(
        "base_type={};temperature={:?}..{:?};precipitation={:?}..{:?};humidity={:?};features={}",
        base_type.as_str(),
        climate.temperature_c.min,
        climate.temperature_c.max,
        climate.precipitation_mm.min,
        climate.precipitation_mm.max,
        climate.humidity,
        features.join(","),
    )
}

/// Content-addressed biome id.
pub fn biome_id(base_type: BiomeType, climate: &Climate, special_features: &[String]) -> BiomeId {
    let key = canonical_biome_key(base_type, climate, special_features);
    BiomeId::from(short_hash(&key, BIOME_ID_BYTES))
}

#[cfg(test)]
mod tests {
    use starforge_types::ValueRange;

    use super::*;

    fn climate() -> Climate {
        Climate {
            temperature_c: ValueRange::new(4.5, 15.25),
            precipitation_mm: ValueRange::new(800.0, 1600.0),
            humidity: 0.72,
            seasonality: 0.4,
            storm_frequency: 0.1,
            wind_patterns: vec![String::from("cyclonic")],
        }
    }

    #[test]
    fn short_hash_length_and_charset() {
        let h = short_hash("forest", 6);
        assert_eq!(h.len(), 12);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(short_hash("forest", 5).len(), 10);
    }

    #[test]
    fn short_hash_is_stable() {
        assert_eq!(short_hash("abc", 6), short_hash("abc", 6));
        assert_ne!(short_hash("abc", 6), short_hash("abd", 6));
    }

    #[test]
    fn feature_order_does_not_change_id() {
        let a = vec![String::from("singing_rocks"), String::from("prismatic_fog")];
        let b = vec![String::from("prismatic_fog"), String::from("singing_rocks")];
        assert_eq!(
            biome_id(BiomeType::Forest, &climate(), &a),
            biome_id(BiomeType::Forest, &climate(), &b)
        );
    }

    #[test]
    fn archetype_and_climate_change_id() {
        let features = vec![String::from("singing_rocks")];
        let base = biome_id(BiomeType::Forest, &climate(), &features);
        assert_ne!(base, biome_id(BiomeType::Desert, &climate(), &features));

        let mut wetter = climate();
        wetter.humidity = 0.8;
        assert_ne!(base, biome_id(BiomeType::Forest, &wetter, &features));
    }

    #[test]
    fn non_summary_climate_fields_do_not_change_id() {
        let features = Vec::new();
        let mut stormy = climate();
        stormy.storm_frequency = 0.9;
        stormy.wind_patterns = vec![String::from("strong_gales")];
        assert_eq!(
            biome_id(BiomeType::Marine, &climate(), &features),
            biome_id(BiomeType::Marine, &stormy, &features)
        );
    }
}
