//! Biome generation and derived metrics.
//!
//! Draw order is fixed: archetype, name, climate, soil, vegetation, fauna,
//! special features. Changing the order changes every biome produced from a
//! given seed.

use rand::Rng;
use starforge_types::{Biome, BiomeType, Climate, Fauna, Soil, Vegetation};

use crate::catalog::{
    self, ACTIVITY_PATTERNS, CANOPY_STRUCTURES, DOMINANT_FORMS, EXOTIC_CANOPY_STRUCTURES,
    EXOTIC_LEAF_TYPES, FEATURE_COUNT_WEIGHTS, FEEDING_STRATEGIES, GROWTH_PATTERNS, LEAF_TYPES,
    MINERALS, MOBILITY_TYPES, PLANT_REPRODUCTION, PrecipitationBand, ROOT_SYSTEMS,
    SIZE_DISTRIBUTIONS, SOCIAL_STRUCTURES, SPECIAL_FEATURES, TemperatureBand, WIND_PATTERNS,
};
use crate::content_id::biome_id;
use crate::naming::generate_biome_name;
use crate::sample::{clamp01, pick_tag, pick_variant, pick_weighted, sample_tags, uniform};

/// Generate a complete biome from the supplied random source.
pub fn generate_biome<R: Rng + ?Sized>(rng: &mut R) -> Biome {
    let base_type =
        pick_weighted(rng, catalog::BIOME_TYPE_WEIGHTS).unwrap_or(BiomeType::Forest);
    let name = generate_biome_name(rng);
    let climate = generate_climate(rng, base_type);
    let soil = generate_soil(rng, base_type);
    let vegetation = generate_vegetation(rng, base_type);
    let fauna = generate_fauna(rng, base_type);

    let feature_count = pick_weighted(rng, FEATURE_COUNT_WEIGHTS).unwrap_or(0);
    let special_features = sample_tags(rng, SPECIAL_FEATURES, feature_count, feature_count);

    let rarity = rarity(&climate, special_features.len());
    let biodiversity = biodiversity(&climate, &soil);
    let productivity = productivity(&climate, &soil);
    let id = biome_id(base_type, &climate, &special_features);

    Biome {
        id,
        name,
        base_type,
        climate,
        soil,
        vegetation,
        fauna,
        special_features,
        rarity,
        biodiversity,
        productivity,
    }
}

/// Climate: canonical bands blended with a random band pair.
pub fn generate_climate<R: Rng + ?Sized>(rng: &mut R, base_type: BiomeType) -> Climate {
    let profile = catalog::climate_profile(base_type);
    let temperature_variation = pick_variant(rng, TemperatureBand::ALL, profile.temperature);
    let precipitation_variation =
        pick_variant(rng, PrecipitationBand::ALL, profile.precipitation);

    let temperature_c = profile
        .temperature
        .range()
        .blend(&temperature_variation.range(), rng.random::<f64>());
    let precipitation_mm = profile
        .precipitation
        .range()
        .blend(&precipitation_variation.range(), rng.random::<f64>());

    let humidity = (profile.humidity + uniform(rng, -0.3, 0.3)).clamp(0.1, 0.95);
    let seasonality = uniform(rng, 0.1, 0.9);
    let storm_frequency = uniform(rng, 0.0, 1.0);
    let wind_patterns = sample_tags(rng, WIND_PATTERNS, 1, 3);

    Climate {
        temperature_c,
        precipitation_mm,
        humidity,
        seasonality,
        storm_frequency,
        wind_patterns,
    }
}

/// Soil: canonical profile plus bounded noise.
pub fn generate_soil<R: Rng + ?Sized>(rng: &mut R, base_type: BiomeType) -> Soil {
    let profile = catalog::soil_profile(base_type);
    let minerals = sample_tags(rng, MINERALS, 2, 5);
    let fertility = clamp01(profile.fertility + uniform(rng, -0.2, 0.2));
    let drainage = clamp01(profile.drainage + uniform(rng, -0.2, 0.2));
    let ph_level = clamp01(profile.ph_level + uniform(rng, -0.3, 0.3));
    let organic_content = clamp01(profile.organic_content + uniform(rng, -0.2, 0.2));

    Soil {
        fertility,
        drainage,
        ph_level,
        organic_content,
        minerals,
    }
}

/// Vegetation: exotic archetypes draw canopy and leaf from the exotic catalogs.
pub fn generate_vegetation<R: Rng + ?Sized>(rng: &mut R, base_type: BiomeType) -> Vegetation {
    let (canopy_structure, leaf_type) = if base_type.is_exotic() {
        (
            pick_tag(rng, EXOTIC_CANOPY_STRUCTURES),
            pick_tag(rng, EXOTIC_LEAF_TYPES),
        )
    } else {
        (pick_tag(rng, CANOPY_STRUCTURES), pick_tag(rng, LEAF_TYPES))
    };

    Vegetation {
        canopy_structure,
        leaf_type,
        growth_pattern: pick_tag(rng, GROWTH_PATTERNS),
        root_system: pick_tag(rng, ROOT_SYSTEMS),
        reproduction_method: pick_tag(rng, PLANT_REPRODUCTION),
        dominant_forms: sample_tags(rng, DOMINANT_FORMS, 2, 4),
    }
}

/// Fauna: sampled tags plus the archetype's signature mobility, if any.
pub fn generate_fauna<R: Rng + ?Sized>(rng: &mut R, base_type: BiomeType) -> Fauna {
    let size_distribution = pick_tag(rng, SIZE_DISTRIBUTIONS);
    let activity_patterns = sample_tags(rng, ACTIVITY_PATTERNS, 2, 4);
    let feeding_strategies = sample_tags(rng, FEEDING_STRATEGIES, 2, 3);
    let mut mobility_types = sample_tags(rng, MOBILITY_TYPES, 2, 3);
    if let Some(signature) = catalog::signature_mobility(base_type)
        .filter(|signature| !mobility_types.iter().any(|m| m == signature))
    {
        mobility_types.push(signature.to_owned());
    }
    let social_structures = sample_tags(rng, SOCIAL_STRUCTURES, 1, 2);

    Fauna {
        size_distribution,
        activity_patterns,
        feeding_strategies,
        mobility_types,
        social_structures,
    }
}

/// `|humidity - 0.5| * 0.3 + (1 - temperature_span / 100) * 0.3 + features * 0.1`, clamped.
pub fn rarity(climate: &Climate, feature_count: usize) -> f64 {
    let features = f64::from(u32::try_from(feature_count).unwrap_or(u32::MAX));
    let raw = (climate.humidity - 0.5).abs() * 0.3
        + (1.0 - climate.temperature_c.span() / 100.0) * 0.3
        + features * 0.1;
    clamp01(raw)
}

/// `(1 - seasonality) * 0.4 + fertility * 0.3 + (1 - |humidity - 0.7|) * 0.3`, clamped.
pub fn biodiversity(climate: &Climate, soil: &Soil) -> f64 {
    let raw = (1.0 - climate.seasonality) * 0.4
        + soil.fertility * 0.3
        + (1.0 - (climate.humidity - 0.7).abs()) * 0.3;
    clamp01(raw)
}

/// `fertility * 0.4 + humidity * 0.3 + (temperature_max / 50) * 0.3`, clamped.
pub fn productivity(climate: &Climate, soil: &Soil) -> f64 {
    let raw = soil.fertility * 0.4
        + climate.humidity * 0.3
        + (climate.temperature_c.max / 50.0) * 0.3;
    clamp01(raw)
}
