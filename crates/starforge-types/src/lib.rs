//! Shared type definitions for the Starforge universe generator.
//!
//! This crate is the single source of truth for the data model shared by the
//! content generator, the world generator, the job pipeline, and the storage
//! layer. Types flow downstream to `TypeScript` via `ts-rs` for the client
//! that polls job status and browses generated worlds.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifier wrappers (UUID, owner, content-addressed)
//! - [`enums`] -- Job status and the fixed catalogs (galaxy, star, biome, life)
//! - [`job`] -- Job Record and the client-facing status payload
//! - [`world`] -- Universe, Galaxy, `StarSystem`, Planet and planet-biome links
//! - [`ecology`] -- Biome and Lifeform descriptions with attribute groups

pub mod ecology;
pub mod enums;
pub mod ids;
pub mod job;
pub mod world;

// Re-export all public types at crate root for convenience.
pub use ecology::{
    Anatomy, Biome, Climate, Ecology, Fauna, Genetics, Lifeform, Physiology, Soil, ValueRange,
    Vegetation,
};
pub use enums::{
    BiomeType, Complexity, GalaxyType, JobKind, JobStatus, LifeDomain, ReproductionType, StarType,
    TrophicLevel, UnknownVariant,
};
pub use ids::{
    BiomeId, GalaxyId, JobId, LifeformId, OwnerId, PlanetBiomeId, PlanetId, StarSystemId,
    UniverseId,
};
pub use job::{JobRecord, JobStatusReport};
pub use world::{Galaxy, Planet, PlanetBiome, StarSystem, Universe};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for client-facing types.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. The files are written to the `bindings/`
        // directory relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::JobId::export_all();
        let _ = crate::ids::OwnerId::export_all();
        let _ = crate::ids::UniverseId::export_all();
        let _ = crate::ids::BiomeId::export_all();

        // Enums
        let _ = crate::enums::JobStatus::export_all();
        let _ = crate::enums::BiomeType::export_all();

        // Payloads
        let _ = crate::job::JobStatusReport::export_all();
        let _ = crate::world::Universe::export_all();
        let _ = crate::world::Planet::export_all();
        let _ = crate::ecology::Biome::export_all();
        let _ = crate::ecology::Lifeform::export_all();
    }
}
