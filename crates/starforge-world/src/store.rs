//! The world persistence seam.
//!
//! Every insert method writes one stage batch atomically: either all rows
//! of the batch become visible or none do. Biomes and lifeforms are
//! content-addressed and shared across universes, so inserting one whose id
//! already exists is a no-op rather than a conflict.

use async_trait::async_trait;
use starforge_types::{
    Biome, BiomeId, Galaxy, GalaxyId, Lifeform, OwnerId, Planet, PlanetBiome, PlanetId,
    StarSystem, StarSystemId, Universe, UniverseId,
};

use crate::error::StoreError;

/// Everything created by the planet stage, committed as one unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetBatch {
    /// New planets.
    pub planets: Vec<Planet>,
    /// Biomes present on habitable planets (may repeat existing ids).
    pub biomes: Vec<Biome>,
    /// Planet-to-biome links.
    pub links: Vec<PlanetBiome>,
    /// Lifeforms of the biomes in this batch.
    pub lifeforms: Vec<Lifeform>,
}

impl PlanetBatch {
    /// Whether the batch holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
            && self.biomes.is_empty()
            && self.links.is_empty()
            && self.lifeforms.is_empty()
    }
}

/// Durable storage for the world tree and its ecology.
#[async_trait]
pub trait WorldStore: Send + Sync {
    /// Persist a new universe.
    async fn insert_universe(&self, universe: &Universe) -> Result<(), StoreError>;

    /// Persist all galaxies of one stage.
    async fn insert_galaxies(&self, galaxies: &[Galaxy]) -> Result<(), StoreError>;

    /// Persist all star systems of one stage.
    async fn insert_star_systems(&self, systems: &[StarSystem]) -> Result<(), StoreError>;

    /// Persist the planet stage: planets, biomes, links, and lifeforms.
    async fn insert_planets(&self, batch: &PlanetBatch) -> Result<(), StoreError>;

    /// Fetch a universe by id.
    async fn get_universe(&self, id: UniverseId) -> Result<Option<Universe>, StoreError>;

    /// All universes of an owner, oldest first.
    async fn universes_by_owner(&self, owner: OwnerId) -> Result<Vec<Universe>, StoreError>;

    /// Galaxies of a universe, in creation order.
    async fn galaxies_in_universe(&self, id: UniverseId) -> Result<Vec<Galaxy>, StoreError>;

    /// Star systems of a galaxy, in creation order.
    async fn systems_in_galaxy(&self, id: GalaxyId) -> Result<Vec<StarSystem>, StoreError>;

    /// Planets of a star system, ordered by orbital position.
    async fn planets_in_system(&self, id: StarSystemId) -> Result<Vec<Planet>, StoreError>;

    /// Fetch a biome by its content-addressed id.
    async fn get_biome(&self, id: &BiomeId) -> Result<Option<Biome>, StoreError>;

    /// Biomes linked to a planet.
    async fn biomes_on_planet(&self, id: PlanetId) -> Result<Vec<Biome>, StoreError>;

    /// Lifeforms belonging to a biome.
    async fn lifeforms_in_biome(&self, id: &BiomeId) -> Result<Vec<Lifeform>, StoreError>;

    /// Delete a universe and every galaxy, system, planet, and planet-biome
    /// link beneath it. Shared biomes and lifeforms are kept.
    ///
    /// Returns `false` when the universe did not exist.
    async fn delete_universe(&self, id: UniverseId) -> Result<bool, StoreError>;
}
