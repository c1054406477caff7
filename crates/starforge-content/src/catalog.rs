//! Fixed catalogs and canonical per-archetype profiles.
//!
//! Everything in this module is static configuration. Weights and profiles
//! are design constants and are not adjustable at runtime.
//!
//! # Archetype weights
//!
//! | Archetype   | Weight |
//! |-------------|--------|
//! | forest      | 0.15   |
//! | grassland   | 0.12   |
//! | marine      | 0.12   |
//! | wetland     | 0.10   |
//! | desert      | 0.10   |
//! | alpine      | 0.08   |
//! | fungal      | 0.08   |
//! | cavernous   | 0.07   |
//! | volcanic    | 0.06   |
//! | crystalline | 0.05   |
//! | luminous    | 0.04   |
//! | floating    | 0.03   |

use starforge_types::{BiomeType, Complexity, ValueRange};

/// Weighted archetype table; weights sum to 1.
pub const BIOME_TYPE_WEIGHTS: &[(BiomeType, f64)] = &[
    (BiomeType::Forest, 0.15),
    (BiomeType::Grassland, 0.12),
    (BiomeType::Wetland, 0.10),
    (BiomeType::Desert, 0.10),
    (BiomeType::Alpine, 0.08),
    (BiomeType::Marine, 0.12),
    (BiomeType::Volcanic, 0.06),
    (BiomeType::Cavernous, 0.07),
    (BiomeType::Crystalline, 0.05),
    (BiomeType::Fungal, 0.08),
    (BiomeType::Luminous, 0.04),
    (BiomeType::Floating, 0.03),
];

/// Number of special features per biome, weighted towards two.
pub const FEATURE_COUNT_WEIGHTS: &[(usize, f64)] =
    &[(0, 0.10), (1, 0.30), (2, 0.40), (3, 0.15), (4, 0.05)];

// ---------------------------------------------------------------------------
// Climate bands
// ---------------------------------------------------------------------------

/// Named temperature band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    /// -100 to -50 °C.
    Cryogenic,
    /// -49 to -20 °C.
    Frigid,
    /// -19 to 0 °C.
    Cold,
    /// 1 to 10 °C.
    Cool,
    /// 11 to 20 °C.
    Temperate,
    /// 21 to 28 °C.
    Warm,
    /// 29 to 40 °C.
    Hot,
    /// 41 to 60 °C.
    Scorching,
    /// 61 to 100 °C.
    Molten,
}

impl TemperatureBand {
    /// Every band, coldest first.
    pub const ALL: &'static [Self] = &[
        Self::Cryogenic,
        Self::Frigid,
        Self::Cold,
        Self::Cool,
        Self::Temperate,
        Self::Warm,
        Self::Hot,
        Self::Scorching,
        Self::Molten,
    ];

    /// Temperature interval in degrees Celsius.
    pub const fn range(self) -> ValueRange {
        match self {
            Self::Cryogenic => ValueRange::new(-100.0, -50.0),
            Self::Frigid => ValueRange::new(-49.0, -20.0),
            Self::Cold => ValueRange::new(-19.0, 0.0),
            Self::Cool => ValueRange::new(1.0, 10.0),
            Self::Temperate => ValueRange::new(11.0, 20.0),
            Self::Warm => ValueRange::new(21.0, 28.0),
            Self::Hot => ValueRange::new(29.0, 40.0),
            Self::Scorching => ValueRange::new(41.0, 60.0),
            Self::Molten => ValueRange::new(61.0, 100.0),
        }
    }
}

/// Named annual precipitation band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationBand {
    /// 0 to 50 mm.
    Hyperarid,
    /// 51 to 250 mm.
    Arid,
    /// 251 to 500 mm.
    SemiArid,
    /// 501 to 1000 mm.
    Moderate,
    /// 1001 to 2000 mm.
    Humid,
    /// 2001 to 4000 mm.
    VeryHumid,
    /// 4001 to 8000 mm.
    Superhumid,
    /// 8001 to 15000 mm.
    Deluge,
}

impl PrecipitationBand {
    /// Every band, driest first.
    pub const ALL: &'static [Self] = &[
        Self::Hyperarid,
        Self::Arid,
        Self::SemiArid,
        Self::Moderate,
        Self::Humid,
        Self::VeryHumid,
        Self::Superhumid,
        Self::Deluge,
    ];

    /// Precipitation interval in millimetres per year.
    pub const fn range(self) -> ValueRange {
        match self {
            Self::Hyperarid => ValueRange::new(0.0, 50.0),
            Self::Arid => ValueRange::new(51.0, 250.0),
            Self::SemiArid => ValueRange::new(251.0, 500.0),
            Self::Moderate => ValueRange::new(501.0, 1000.0),
            Self::Humid => ValueRange::new(1001.0, 2000.0),
            Self::VeryHumid => ValueRange::new(2001.0, 4000.0),
            Self::Superhumid => ValueRange::new(4001.0, 8000.0),
            Self::Deluge => ValueRange::new(8001.0, 15000.0),
        }
    }
}

/// Canonical climate of an archetype before random blending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateProfile {
    /// Canonical temperature band.
    pub temperature: TemperatureBand,
    /// Canonical precipitation band.
    pub precipitation: PrecipitationBand,
    /// Canonical humidity.
    pub humidity: f64,
}

/// Canonical climate for an archetype.
pub const fn climate_profile(base: BiomeType) -> ClimateProfile {
    use PrecipitationBand as P;
    use TemperatureBand as T;

    let (temperature, precipitation, humidity) = match base {
        BiomeType::Forest => (T::Cool, P::Humid, 0.8),
        BiomeType::Grassland => (T::Temperate, P::Moderate, 0.6),
        BiomeType::Wetland => (T::Warm, P::VeryHumid, 0.9),
        BiomeType::Desert => (T::Hot, P::Arid, 0.2),
        BiomeType::Alpine => (T::Cold, P::Moderate, 0.5),
        BiomeType::Marine => (T::Cool, P::Humid, 0.85),
        BiomeType::Volcanic => (T::Scorching, P::Moderate, 0.4),
        BiomeType::Cavernous => (T::Cool, P::SemiArid, 0.7),
        BiomeType::Crystalline => (T::Temperate, P::Moderate, 0.3),
        BiomeType::Fungal => (T::Warm, P::Humid, 0.8),
        BiomeType::Luminous => (T::Temperate, P::Moderate, 0.6),
        BiomeType::Floating => (T::Cool, P::Moderate, 0.5),
    };
    ClimateProfile {
        temperature,
        precipitation,
        humidity,
    }
}

/// Wind-pattern tags.
pub const WIND_PATTERNS: &[&str] = &[
    "gentle_breezes",
    "strong_gales",
    "whispering_winds",
    "cyclonic",
    "magnetic_pulses",
    "psychic_currents",
    "gravitational_flows",
];

// ---------------------------------------------------------------------------
// Soil
// ---------------------------------------------------------------------------

/// Canonical soil of an archetype before random perturbation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilProfile {
    /// Canonical fertility.
    pub fertility: f64,
    /// Canonical drainage.
    pub drainage: f64,
    /// Canonical normalized pH.
    pub ph_level: f64,
    /// Canonical organic content.
    pub organic_content: f64,
}

/// Canonical soil for an archetype.
pub const fn soil_profile(base: BiomeType) -> SoilProfile {
    let (fertility, drainage, ph_level, organic_content) = match base {
        BiomeType::Forest => (0.7, 0.6, 0.3, 0.8),
        BiomeType::Grassland => (0.75, 0.6, 0.5, 0.6),
        BiomeType::Wetland => (0.8, 0.1, 0.4, 0.9),
        BiomeType::Desert => (0.2, 0.9, 0.7, 0.1),
        BiomeType::Alpine => (0.35, 0.8, 0.45, 0.3),
        BiomeType::Marine => (0.55, 0.2, 0.65, 0.5),
        BiomeType::Volcanic => (0.9, 0.8, 0.5, 0.3),
        BiomeType::Cavernous => (0.3, 0.5, 0.6, 0.4),
        BiomeType::Crystalline => (0.3, 0.7, 0.6, 0.1),
        BiomeType::Fungal => (0.65, 0.4, 0.35, 0.95),
        BiomeType::Luminous => (0.5, 0.5, 0.5, 0.5),
        BiomeType::Floating => (0.4, 0.85, 0.5, 0.35),
    };
    SoilProfile {
        fertility,
        drainage,
        ph_level,
        organic_content,
    }
}

/// Mineral tags.
pub const MINERALS: &[&str] = &[
    "silica_crystals",
    "magnetic_ores",
    "psychic_resonators",
    "bioluminescent_minerals",
    "memory_stones",
    "gravity_dust",
    "phase_crystals",
    "prismatic_shards",
    "echoing_rocks",
];

// ---------------------------------------------------------------------------
// Vegetation
// ---------------------------------------------------------------------------

/// Canopy structures for ordinary archetypes.
pub const CANOPY_STRUCTURES: &[&str] = &[
    "towering",
    "layered",
    "sparse",
    "dense",
    "floating",
    "underground",
    "crystalline",
    "bioluminescent",
    "transparent",
    "metallic",
    "weeping",
    "spiraling",
    "geometric",
    "symbiotic",
    "parasitic",
];

/// Canopy structures for exotic archetypes.
pub const EXOTIC_CANOPY_STRUCTURES: &[&str] =
    &["crystalline", "bioluminescent", "floating", "energy_based"];

/// Leaf types for ordinary archetypes.
pub const LEAF_TYPES: &[&str] = &[
    "broadleaf",
    "needleleaf",
    "scale_like",
    "succulent",
    "feathery",
    "crystalline",
    "membranous",
    "filamentous",
    "bioluminescent",
    "photosynthetic_fungi",
    "mineral_absorbing",
    "gas_processing",
];

/// Leaf types for exotic archetypes.
pub const EXOTIC_LEAF_TYPES: &[&str] =
    &["crystalline", "membranous", "light_emitting", "gas_processing"];

/// Growth patterns.
pub const GROWTH_PATTERNS: &[&str] = &[
    "rapid_colonizer",
    "slow_ancient",
    "seasonal_boom",
    "continuous",
    "pulsating",
    "symbiotic_clusters",
    "floating_colonies",
    "underground_networks",
];

/// Root systems.
pub const ROOT_SYSTEMS: &[&str] = &[
    "deep_taproot",
    "fibrous_network",
    "aerial_roots",
    "crystalline_anchors",
    "magnetic_attachment",
];

/// Plant reproduction methods.
pub const PLANT_REPRODUCTION: &[&str] = &[
    "spores",
    "seeds",
    "budding",
    "fragmentation",
    "energy_dispersal",
    "psychic_propagation",
];

/// Dominant plant forms.
pub const DOMINANT_FORMS: &[&str] = &[
    "towering_trees",
    "glowing_fungi",
    "crystal_formations",
    "floating_spheres",
    "weeping_vines",
    "spiraling_towers",
    "pulsating_mounds",
    "geometric_structures",
];

// ---------------------------------------------------------------------------
// Fauna
// ---------------------------------------------------------------------------

/// Animal size distributions.
pub const SIZE_DISTRIBUTIONS: &[&str] = &[
    "microscopic_dominant",
    "small_creatures",
    "mixed_sizes",
    "large_megafauna",
    "gigantic_beings",
    "size_variable",
];

/// Activity patterns.
pub const ACTIVITY_PATTERNS: &[&str] = &[
    "diurnal",
    "nocturnal",
    "crepuscular",
    "seasonal",
    "tidal",
    "storm_chasers",
    "light_seekers",
    "shadow_dwellers",
];

/// Feeding strategies.
pub const FEEDING_STRATEGIES: &[&str] = &[
    "photosynthetic",
    "carnivorous",
    "herbivorous",
    "omnivorous",
    "filter_feeding",
    "scavenging",
    "parasitic",
    "symbiotic",
    "mineral_consuming",
    "energy_absorbing",
    "dimensional_feeding",
];

/// Mobility types.
pub const MOBILITY_TYPES: &[&str] = &[
    "burrowing",
    "arboreal",
    "aerial",
    "aquatic",
    "subterranean",
    "gliding",
    "teleporting",
    "phase_shifting",
    "gravity_defying",
];

/// Social structures.
pub const SOCIAL_STRUCTURES: &[&str] = &[
    "solitary",
    "pack_hunters",
    "swarm_intelligence",
    "hive_mind",
    "symbiotic_colonies",
    "telepathic_network",
    "individualistic",
];

/// Mobility type every fauna of the archetype includes, if any.
pub const fn signature_mobility(base: BiomeType) -> Option<&'static str> {
    match base {
        BiomeType::Forest => Some("arboreal"),
        BiomeType::Desert => Some("burrowing"),
        BiomeType::Marine | BiomeType::Wetland => Some("aquatic"),
        BiomeType::Cavernous => Some("subterranean"),
        BiomeType::Alpine => Some("gliding"),
        BiomeType::Floating => Some("aerial"),
        BiomeType::Grassland
        | BiomeType::Volcanic
        | BiomeType::Crystalline
        | BiomeType::Fungal
        | BiomeType::Luminous => None,
    }
}

// ---------------------------------------------------------------------------
// Special features
// ---------------------------------------------------------------------------

/// Global special-feature catalog.
pub const SPECIAL_FEATURES: &[&str] = &[
    "floating_islands",
    "crystalline_forests",
    "bioluminescent_flora",
    "singing_rocks",
    "memory_absorbing_plants",
    "time_dilated_zones",
    "gravity_anomalies",
    "dimensional_portals",
    "psychic_resonance",
    "mineral_growths",
    "liquid_crystal_rivers",
    "gas_giant_vegetation",
    "magnetic_storms",
    "prismatic_fog",
    "echoing_valleys",
    "dream_catching_fungi",
    "light_bending_trees",
    "sound_gardens",
];

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// Name prefixes.
pub const NAME_PREFIXES: &[&str] = &[
    "Crystal",
    "Shadow",
    "Verdant",
    "Azure",
    "Crimson",
    "Emerald",
    "Sapphire",
    "Obsidian",
    "Pearl",
    "Jade",
    "Amber",
    "Opal",
    "Whispering",
    "Singing",
    "Dancing",
    "Floating",
    "Shifting",
    "Eternal",
    "Ancient",
    "Primordial",
    "Celestial",
    "Abyssal",
];

/// Name suffixes.
pub const NAME_SUFFIXES: &[&str] = &[
    "wood", "vale", "mire", "peak", "reach", "deep", "height", "garden", "waste", "sanctum",
    "domain", "realm", "expanse", "jungle", "forest", "marsh", "tundra", "desert", "cavern",
    "grove", "thicket", "fen", "bog", "strand", "crag",
];

/// Connector phrases for compound names.
pub const NAME_CONNECTORS: &[&str] = &[
    " of ",
    " in the ",
    " beyond the ",
    " within the ",
    " under ",
    " over the ",
    " across the ",
    " between the ",
    " amid the ",
];

/// Descriptors for compound names.
pub const NAME_DESCRIPTORS: &[&str] = &[
    "Lost",
    "Forgotten",
    "Hidden",
    "Secret",
    "Mysterious",
    "Enchanted",
    "Cursed",
    "Blessed",
    "Sacred",
    "Profane",
    "Timeless",
    "Endless",
];

/// Elements for mystical names.
pub const NAME_ELEMENTS: &[&str] =
    &["Fire", "Water", "Earth", "Air", "Light", "Shadow", "Time", "Space"];

// ---------------------------------------------------------------------------
// Lifeforms
// ---------------------------------------------------------------------------

/// Complexity tiers, weighted towards simple life.
pub const COMPLEXITY_WEIGHTS: &[(Complexity, f64)] = &[
    (Complexity::Microbial, 0.25),
    (Complexity::Simple, 0.30),
    (Complexity::Intermediate, 0.25),
    (Complexity::Complex, 0.15),
    (Complexity::Sapient, 0.05),
];

/// Lifespan bounds in years for a complexity tier.
pub const fn lifespan_bounds(tier: Complexity) -> ValueRange {
    match tier {
        Complexity::Microbial => ValueRange::new(0.001, 0.1),
        Complexity::Simple => ValueRange::new(0.1, 5.0),
        Complexity::Intermediate => ValueRange::new(1.0, 40.0),
        Complexity::Complex => ValueRange::new(5.0, 200.0),
        Complexity::Sapient => ValueRange::new(40.0, 1000.0),
    }
}

/// Adult mass bounds in kilograms for a complexity tier.
pub const fn adult_size_bounds(tier: Complexity) -> ValueRange {
    match tier {
        Complexity::Microbial => ValueRange::new(1e-12, 1e-6),
        Complexity::Simple => ValueRange::new(1e-4, 1.0),
        Complexity::Intermediate => ValueRange::new(0.01, 100.0),
        Complexity::Complex => ValueRange::new(1.0, 20_000.0),
        Complexity::Sapient => ValueRange::new(20.0, 2_000.0),
    }
}

/// Body plans.
pub const BODY_PLANS: &[&str] = &[
    "unicellular",
    "colonial",
    "vermiform",
    "arthropod",
    "vertebrate",
    "radial_polyp",
    "amorphous",
    "crystalline_lattice",
];

/// Body symmetries.
pub const SYMMETRIES: &[&str] = &["bilateral", "radial", "spherical", "asymmetric", "fractal"];

/// Outer coverings.
pub const COVERINGS: &[&str] = &[
    "membrane", "scales", "fur", "feathers", "chitin", "bark", "mineral_shell", "plasma_sheath",
];

/// Sensory organs.
pub const SENSES: &[&str] = &[
    "vision",
    "echolocation",
    "chemoreception",
    "electroreception",
    "magnetoreception",
    "thermal_sensing",
    "telepathic_sensing",
];

/// Metabolic pathways for producers.
pub const AUTOTROPH_METABOLISMS: &[&str] =
    &["photosynthetic", "chemosynthetic", "radiosynthetic", "thermosynthetic"];

/// Metabolic pathways for consumers.
pub const CONSUMER_METABOLISMS: &[&str] =
    &["aerobic", "anaerobic", "fermentative", "lithotrophic", "energy_absorbing"];

/// Respiration modes.
pub const RESPIRATION_MODES: &[&str] =
    &["lungs", "gills", "diffusion", "spiracles", "none"];

/// Thermoregulation modes.
pub const THERMOREGULATION: &[&str] = &["ectothermic", "endothermic", "heterothermic", "cryostatic"];

/// Genome materials.
pub const GENOME_TYPES: &[&str] = &["dna", "rna", "xna", "crystalline_lattice", "quantum_encoded"];

/// Habitat niches.
pub const HABITAT_NICHES: &[&str] = &[
    "canopy",
    "understory",
    "ground",
    "subsurface",
    "aquatic",
    "aerial",
    "symbiotic_host",
];

/// Daily activity cycles.
pub const ACTIVITY_CYCLES: &[&str] = &["diurnal", "nocturnal", "crepuscular", "cathemeral"];

/// Social behaviors.
pub const SOCIAL_BEHAVIORS: &[&str] = &["solitary", "paired", "herd", "colony", "hive", "network"];

/// Special abilities.
pub const SPECIAL_ABILITIES: &[&str] = &[
    "bioluminescence",
    "regeneration",
    "telepathy",
    "phase_shifting",
    "camouflage",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archetype_weights_sum_to_one() {
        let total: f64 = BIOME_TYPE_WEIGHTS.iter().map(|&(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_archetype_is_weighted() {
        for base in BiomeType::ALL {
            assert!(BIOME_TYPE_WEIGHTS.iter().any(|&(b, _)| b == *base));
        }
    }

    #[test]
    fn feature_count_weights_sum_to_one() {
        let total: f64 = FEATURE_COUNT_WEIGHTS.iter().map(|&(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bands_are_ordered_intervals() {
        for band in TemperatureBand::ALL {
            assert!(band.range().min < band.range().max);
        }
        for band in PrecipitationBand::ALL {
            assert!(band.range().min < band.range().max);
        }
    }

    #[test]
    fn soil_profiles_are_unit_values() {
        for base in BiomeType::ALL {
            let p = soil_profile(*base);
            for v in [p.fertility, p.drainage, p.ph_level, p.organic_content] {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn signature_mobility_is_in_catalog() {
        for base in BiomeType::ALL {
            if let Some(tag) = signature_mobility(*base) {
                assert!(MOBILITY_TYPES.contains(&tag));
            }
        }
    }
}
