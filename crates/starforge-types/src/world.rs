//! Hierarchical world entities: Universe, Galaxy, `StarSystem`, Planet.
//!
//! Every entity below the universe has exactly one parent. Rows are created
//! in bulk by the world generator and never mutated afterwards; they are
//! removed only by cascading deletion of the owning universe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{GalaxyType, StarType};
use crate::ids::{BiomeId, GalaxyId, OwnerId, PlanetBiomeId, PlanetId, StarSystemId, UniverseId};

/// Root of a generated world tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Universe {
    /// Unique id.
    pub id: UniverseId,
    /// The user who owns this universe.
    pub owner_id: OwnerId,
    /// Display name.
    pub name: String,
    /// Seed from which all child randomness is derived.
    pub seed: i64,
    /// Free-form generator metadata.
    pub metadata: serde_json::Value,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A galaxy inside a universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Galaxy {
    /// Unique id.
    pub id: GalaxyId,
    /// Owning universe.
    pub universe_id: UniverseId,
    /// Display name (`Galaxy 3`).
    pub name: String,
    /// Seed for this galaxy's star systems.
    pub seed: i64,
    /// Nominal star count.
    pub num_stars: i64,
    /// Morphology.
    pub galaxy_type: GalaxyType,
    /// Free-form generator metadata.
    pub metadata: serde_json::Value,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A star system inside a galaxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StarSystem {
    /// Unique id.
    pub id: StarSystemId,
    /// Owning galaxy.
    pub galaxy_id: GalaxyId,
    /// Display name (`System 3-7`).
    pub name: String,
    /// Seed for this system's planets and ecology.
    pub seed: i64,
    /// Stellar classification.
    pub star_type: StarType,
    /// Map x coordinate within the galaxy.
    pub position_x: i32,
    /// Map y coordinate within the galaxy.
    pub position_y: i32,
    /// Free-form generator metadata.
    pub metadata: serde_json::Value,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A planet orbiting a star system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Planet {
    /// Unique id.
    pub id: PlanetId,
    /// Owning star system.
    pub system_id: StarSystemId,
    /// Display name.
    pub name: String,
    /// Relative size class.
    pub size: i32,
    /// Orbital ordinal within the system, 1-based and contiguous.
    pub position: i32,
    /// Whether the planet supports ecology.
    pub habitable: bool,
    /// Free-form generator metadata.
    pub metadata: serde_json::Value,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Link between a planet and one of the biomes present on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlanetBiome {
    /// Unique id.
    pub id: PlanetBiomeId,
    /// The planet.
    pub planet_id: PlanetId,
    /// The biome present on it.
    pub biome_id: BiomeId,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}
