//! Generation parameters.
//!
//! These structs deserialize from the `generation` section of
//! `starforge-config.yaml`; every field has a default so a partial section
//! (or none at all) yields a working configuration.

use rand::Rng;
use serde::Deserialize;

use crate::error::GenerationError;

/// A closed integer range `[min, max]` of counts or sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CountRange {
    /// Inclusive lower bound.
    pub min: u32,
    /// Inclusive upper bound.
    pub max: u32,
}

impl CountRange {
    /// Build a range from its bounds.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range.
    pub const fn contains(self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Uniform draw from the range. An inverted range yields `min`.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        if self.max < self.min {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }

    fn check(self, field: &str) -> Result<(), GenerationError> {
        if self.min > self.max {
            return Err(GenerationError::InvalidConfig {
                message: format!("{field}: min {} exceeds max {}", self.min, self.max),
            });
        }
        Ok(())
    }
}

/// Shape of a generated universe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationConfig {
    /// Galaxies per universe.
    #[serde(default = "default_galaxy_count")]
    pub galaxy_count: u32,

    /// Nominal star count of each galaxy.
    #[serde(default = "default_stars_per_galaxy")]
    pub stars_per_galaxy: CountRange,

    /// Star systems generated in each galaxy.
    #[serde(default = "default_systems_per_galaxy")]
    pub systems_per_galaxy: CountRange,

    /// Planets generated around each star system.
    #[serde(default = "default_planets_per_system")]
    pub planets_per_system: CountRange,

    /// Planet size class.
    #[serde(default = "default_planet_size")]
    pub planet_size: CountRange,

    /// Probability that a planet is habitable.
    #[serde(default = "default_habitable_weight")]
    pub habitable_weight: f64,

    /// Biome and lifeform generation on habitable planets.
    #[serde(default)]
    pub ecology: EcologyConfig,
}

/// Ecology generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EcologyConfig {
    /// Whether habitable planets receive biomes and lifeforms.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Biomes generated on each habitable planet.
    #[serde(default = "default_biomes_per_habitable_planet")]
    pub biomes_per_habitable_planet: CountRange,
}

const fn default_galaxy_count() -> u32 {
    5
}

const fn default_stars_per_galaxy() -> CountRange {
    CountRange::new(10_000, 200_000)
}

const fn default_systems_per_galaxy() -> CountRange {
    CountRange::new(3, 8)
}

const fn default_planets_per_system() -> CountRange {
    CountRange::new(1, 8)
}

const fn default_planet_size() -> CountRange {
    CountRange::new(1, 10)
}

const fn default_habitable_weight() -> f64 {
    0.2
}

const fn default_true() -> bool {
    true
}

const fn default_biomes_per_habitable_planet() -> CountRange {
    CountRange::new(1, 3)
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            galaxy_count: default_galaxy_count(),
            stars_per_galaxy: default_stars_per_galaxy(),
            systems_per_galaxy: default_systems_per_galaxy(),
            planets_per_system: default_planets_per_system(),
            planet_size: default_planet_size(),
            habitable_weight: default_habitable_weight(),
            ecology: EcologyConfig::default(),
        }
    }
}

impl Default for EcologyConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            biomes_per_habitable_planet: default_biomes_per_habitable_planet(),
        }
    }
}

impl GenerationConfig {
    /// Reject configurations the generator cannot honor.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.galaxy_count == 0 {
            return Err(GenerationError::InvalidConfig {
                message: String::from("galaxy_count must be at least 1"),
            });
        }
        if !(0.0..=1.0).contains(&self.habitable_weight) {
            return Err(GenerationError::InvalidConfig {
                message: format!(
                    "habitable_weight {} is outside [0, 1]",
                    self.habitable_weight
                ),
            });
        }
        self.stars_per_galaxy.check("stars_per_galaxy")?;
        self.systems_per_galaxy.check("systems_per_galaxy")?;
        self.planets_per_system.check("planets_per_system")?;
        self.planet_size.check("planet_size")?;
        self.ecology
            .biomes_per_habitable_planet
            .check("ecology.biomes_per_habitable_planet")
    }
}
