//! Biome and Lifeform descriptions.
//!
//! A [`Biome`] is an ecological archetype with four attribute groups
//! (climate, soil, vegetation, fauna) and three derived metrics in `[0, 1]`.
//! A [`Lifeform`] belongs to exactly one biome and carries anatomy,
//! physiology, genetics, and ecology groups. Both are immutable once created.
//!
//! Categorical tags are stored as strings drawn from the fixed catalogs in
//! the content generator.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{BiomeType, Complexity, LifeDomain, ReproductionType, TrophicLevel};
use crate::ids::{BiomeId, LifeformId};

/// A closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ValueRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ValueRange {
    /// Build a range from its bounds.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Linear blend towards `other` by `weight` (0 keeps `self`, 1 yields `other`).
    #[must_use]
    pub fn blend(&self, other: &Self, weight: f64) -> Self {
        Self {
            min: self.min.mul_add(1.0 - weight, other.min * weight),
            max: self.max.mul_add(1.0 - weight, other.max * weight),
        }
    }
}

/// Climate attribute group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Climate {
    /// Temperature band in degrees Celsius.
    pub temperature_c: ValueRange,
    /// Annual precipitation band in millimetres.
    pub precipitation_mm: ValueRange,
    /// Relative humidity in `[0.1, 0.95]`.
    pub humidity: f64,
    /// Seasonal variation in `[0.1, 0.9]`.
    pub seasonality: f64,
    /// Storm frequency in `[0, 1]`.
    pub storm_frequency: f64,
    /// One to three wind-pattern tags.
    pub wind_patterns: Vec<String>,
}

/// Soil attribute group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Soil {
    /// Fertility in `[0, 1]`.
    pub fertility: f64,
    /// Drainage in `[0, 1]`.
    pub drainage: f64,
    /// Normalized pH in `[0, 1]` (0 acidic, 1 alkaline).
    pub ph_level: f64,
    /// Organic content in `[0, 1]`.
    pub organic_content: f64,
    /// Two to five mineral tags.
    pub minerals: Vec<String>,
}

/// Vegetation attribute group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Vegetation {
    /// Canopy structure.
    pub canopy_structure: String,
    /// Leaf type.
    pub leaf_type: String,
    /// Growth pattern.
    pub growth_pattern: String,
    /// Root system.
    pub root_system: String,
    /// Plant reproduction method.
    pub reproduction_method: String,
    /// Two to four dominant plant forms.
    pub dominant_forms: Vec<String>,
}

/// Fauna attribute group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Fauna {
    /// Size distribution of animal life.
    pub size_distribution: String,
    /// Two to four activity patterns.
    pub activity_patterns: Vec<String>,
    /// Two or three feeding strategies.
    pub feeding_strategies: Vec<String>,
    /// Two to four mobility types.
    pub mobility_types: Vec<String>,
    /// One or two social structures.
    pub social_structures: Vec<String>,
}

/// An ecological archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Biome {
    /// Content-addressed id.
    pub id: BiomeId,
    /// Flavor name; never part of the identity.
    pub name: String,
    /// Archetype.
    pub base_type: BiomeType,
    /// Climate group.
    pub climate: Climate,
    /// Soil group.
    pub soil: Soil,
    /// Vegetation group.
    pub vegetation: Vegetation,
    /// Fauna group.
    pub fauna: Fauna,
    /// Zero to four special features.
    pub special_features: Vec<String>,
    /// Derived rarity in `[0, 1]`.
    pub rarity: f64,
    /// Derived biodiversity in `[0, 1]`.
    pub biodiversity: f64,
    /// Derived productivity in `[0, 1]`.
    pub productivity: f64,
}

/// Anatomy attribute group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Anatomy {
    /// Overall body plan.
    pub body_plan: String,
    /// Body symmetry.
    pub symmetry: String,
    /// Number of limbs or appendages.
    pub limb_count: u8,
    /// Outer covering.
    pub covering: String,
    /// One to three sensory organs.
    pub senses: Vec<String>,
}

/// Physiology attribute group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Physiology {
    /// Metabolic pathway.
    pub metabolism: String,
    /// Respiration mode.
    pub respiration: String,
    /// Body temperature regulation.
    pub thermoregulation: String,
    /// Metabolic rate in `[0, 1]`.
    pub metabolic_rate: f64,
}

/// Genetics attribute group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Genetics {
    /// Genetic material.
    pub genome_type: String,
    /// Number of chromosomes (or equivalent units).
    pub chromosome_count: u16,
    /// Mutation rate in `[0, 1]`.
    pub mutation_rate: f64,
}

/// Ecology attribute group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Ecology {
    /// Habitat niche within the biome.
    pub habitat_niche: String,
    /// Daily activity cycle.
    pub activity_cycle: String,
    /// Social behavior.
    pub social_behavior: String,
    /// Relative population density in `[0, 1]`.
    pub population_density: f64,
}

/// An organism description belonging to one biome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Lifeform {
    /// Content-addressed id.
    pub id: LifeformId,
    /// The biome this lifeform belongs to.
    pub biome_id: BiomeId,
    /// Name: biome prefix plus content hash (`Forest_life_3fa91c02de`).
    pub name: String,
    /// Taxonomic domain.
    pub domain: LifeDomain,
    /// Food-web position.
    pub trophic_level: TrophicLevel,
    /// Reproduction mode.
    pub reproduction_type: ReproductionType,
    /// Typical lifespan in years.
    pub lifespan_years: f64,
    /// Typical adult mass in kilograms.
    pub adult_size_kg: f64,
    /// Complexity tier.
    pub complexity: Complexity,
    /// Anatomy group.
    pub anatomy: Anatomy,
    /// Physiology group.
    pub physiology: Physiology,
    /// Genetics group.
    pub genetics: Genetics,
    /// Ecology group.
    pub ecology: Ecology,
    /// Zero to two special abilities.
    pub special_abilities: Vec<String>,
}
