//! In-memory [`WorldStore`].
//!
//! All tables sit behind one lock, so each batch is validated and applied
//! without interleaving. Parent references are checked the way foreign keys
//! would be: a batch naming a missing parent is rejected whole.
//!
//! A failure can be injected per stage with [`MemoryWorldStore::fail_stage`]
//! to exercise partial-generation behavior.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use starforge_types::{
    Biome, BiomeId, Galaxy, GalaxyId, Lifeform, LifeformId, OwnerId, Planet, PlanetBiome,
    PlanetId, StarSystem, StarSystemId, Universe, UniverseId,
};
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::progress::GenerationStage;
use crate::store::{PlanetBatch, WorldStore};

#[derive(Debug, Default)]
struct Tables {
    universes: Vec<Universe>,
    galaxies: Vec<Galaxy>,
    systems: Vec<StarSystem>,
    planets: Vec<Planet>,
    links: Vec<PlanetBiome>,
    biomes: BTreeMap<BiomeId, Biome>,
    lifeforms: BTreeMap<LifeformId, Lifeform>,
    failures: BTreeMap<GenerationStage, String>,
}

impl Tables {
    fn check_failure(&self, stage: GenerationStage) -> Result<(), StoreError> {
        match self.failures.get(&stage) {
            Some(message) => Err(StoreError::Backend {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn has_universe(&self, id: UniverseId) -> bool {
        self.universes.iter().any(|u| u.id == id)
    }

    fn has_galaxy(&self, id: GalaxyId) -> bool {
        self.galaxies.iter().any(|g| g.id == id)
    }

    fn has_system(&self, id: StarSystemId) -> bool {
        self.systems.iter().any(|s| s.id == id)
    }
}

fn conflict(message: String) -> StoreError {
    StoreError::Conflict { message }
}

/// Process-local world storage.
#[derive(Debug, Default)]
pub struct MemoryWorldStore {
    tables: Mutex<Tables>,
}

impl MemoryWorldStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent insert for `stage` fail with `message`.
    pub async fn fail_stage(&self, stage: GenerationStage, message: impl Into<String>) {
        self.tables
            .lock()
            .await
            .failures
            .insert(stage, message.into());
    }

    /// Remove all injected failures.
    pub async fn clear_failures(&self) {
        self.tables.lock().await.failures.clear();
    }

    /// Total star systems stored, across all universes.
    pub async fn system_count(&self) -> usize {
        self.tables.lock().await.systems.len()
    }

    /// Total planets stored, across all universes.
    pub async fn planet_count(&self) -> usize {
        self.tables.lock().await.planets.len()
    }

    /// Total distinct biomes stored.
    pub async fn biome_count(&self) -> usize {
        self.tables.lock().await.biomes.len()
    }
}

#[async_trait]
impl WorldStore for MemoryWorldStore {
    async fn insert_universe(&self, universe: &Universe) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        tables.check_failure(GenerationStage::Universe)?;
        if tables.has_universe(universe.id) {
            return Err(conflict(format!("universe {} already exists", universe.id)));
        }
        tables.universes.push(universe.clone());
        Ok(())
    }

    async fn insert_galaxies(&self, galaxies: &[Galaxy]) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        tables.check_failure(GenerationStage::Galaxies)?;
        for galaxy in galaxies {
            if !tables.has_universe(galaxy.universe_id) {
                return Err(conflict(format!(
                    "galaxy {} references missing universe {}",
                    galaxy.id, galaxy.universe_id
                )));
            }
            if tables.has_galaxy(galaxy.id) {
                return Err(conflict(format!("galaxy {} already exists", galaxy.id)));
            }
        }
        tables.galaxies.extend_from_slice(galaxies);
        Ok(())
    }

    async fn insert_star_systems(&self, systems: &[StarSystem]) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        tables.check_failure(GenerationStage::StarSystems)?;
        for system in systems {
            if !tables.has_galaxy(system.galaxy_id) {
                return Err(conflict(format!(
                    "star system {} references missing galaxy {}",
                    system.id, system.galaxy_id
                )));
            }
            if tables.has_system(system.id) {
                return Err(conflict(format!("star system {} already exists", system.id)));
            }
        }
        tables.systems.extend_from_slice(systems);
        Ok(())
    }

    async fn insert_planets(&self, batch: &PlanetBatch) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        tables.check_failure(GenerationStage::Planets)?;

        for planet in &batch.planets {
            if !tables.has_system(planet.system_id) {
                return Err(conflict(format!(
                    "planet {} references missing star system {}",
                    planet.id, planet.system_id
                )));
            }
        }
        let new_planets: BTreeSet<PlanetId> = batch.planets.iter().map(|p| p.id).collect();
        let new_biomes: BTreeSet<&BiomeId> = batch.biomes.iter().map(|b| &b.id).collect();
        for link in &batch.links {
            let planet_known = new_planets.contains(&link.planet_id)
                || tables.planets.iter().any(|p| p.id == link.planet_id);
            let biome_known =
                new_biomes.contains(&link.biome_id) || tables.biomes.contains_key(&link.biome_id);
            if !planet_known || !biome_known {
                return Err(conflict(format!(
                    "planet-biome link {} references a missing planet or biome",
                    link.id
                )));
            }
        }
        for lifeform in &batch.lifeforms {
            if !new_biomes.contains(&lifeform.biome_id)
                && !tables.biomes.contains_key(&lifeform.biome_id)
            {
                return Err(conflict(format!(
                    "lifeform {} references missing biome {}",
                    lifeform.id, lifeform.biome_id
                )));
            }
        }

        tables.planets.extend_from_slice(&batch.planets);
        for biome in &batch.biomes {
            tables
                .biomes
                .entry(biome.id.clone())
                .or_insert_with(|| biome.clone());
        }
        tables.links.extend_from_slice(&batch.links);
        for lifeform in &batch.lifeforms {
            tables
                .lifeforms
                .entry(lifeform.id.clone())
                .or_insert_with(|| lifeform.clone());
        }
        Ok(())
    }

    async fn get_universe(&self, id: UniverseId) -> Result<Option<Universe>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.universes.iter().find(|u| u.id == id).cloned())
    }

    async fn universes_by_owner(&self, owner: OwnerId) -> Result<Vec<Universe>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .universes
            .iter()
            .filter(|u| u.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn galaxies_in_universe(&self, id: UniverseId) -> Result<Vec<Galaxy>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .galaxies
            .iter()
            .filter(|g| g.universe_id == id)
            .cloned()
            .collect())
    }

    async fn systems_in_galaxy(&self, id: GalaxyId) -> Result<Vec<StarSystem>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .systems
            .iter()
            .filter(|s| s.galaxy_id == id)
            .cloned()
            .collect())
    }

    async fn planets_in_system(&self, id: StarSystemId) -> Result<Vec<Planet>, StoreError> {
        let tables = self.tables.lock().await;
        let mut planets: Vec<Planet> = tables
            .planets
            .iter()
            .filter(|p| p.system_id == id)
            .cloned()
            .collect();
        planets.sort_by_key(|p| p.position);
        Ok(planets)
    }

    async fn get_biome(&self, id: &BiomeId) -> Result<Option<Biome>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.biomes.get(id).cloned())
    }

    async fn biomes_on_planet(&self, id: PlanetId) -> Result<Vec<Biome>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .links
            .iter()
            .filter(|link| link.planet_id == id)
            .filter_map(|link| tables.biomes.get(&link.biome_id).cloned())
            .collect())
    }

    async fn lifeforms_in_biome(&self, id: &BiomeId) -> Result<Vec<Lifeform>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .lifeforms
            .values()
            .filter(|l| &l.biome_id == id)
            .cloned()
            .collect())
    }

    async fn delete_universe(&self, id: UniverseId) -> Result<bool, StoreError> {
        let mut tables = self.tables.lock().await;
        if !tables.has_universe(id) {
            return Ok(false);
        }
        let galaxies: BTreeSet<GalaxyId> = tables
            .galaxies
            .iter()
            .filter(|g| g.universe_id == id)
            .map(|g| g.id)
            .collect();
        let systems: BTreeSet<StarSystemId> = tables
            .systems
            .iter()
            .filter(|s| galaxies.contains(&s.galaxy_id))
            .map(|s| s.id)
            .collect();
        let planets: BTreeSet<PlanetId> = tables
            .planets
            .iter()
            .filter(|p| systems.contains(&p.system_id))
            .map(|p| p.id)
            .collect();

        tables.links.retain(|l| !planets.contains(&l.planet_id));
        tables.planets.retain(|p| !planets.contains(&p.id));
        tables.systems.retain(|s| !systems.contains(&s.id));
        tables.galaxies.retain(|g| !galaxies.contains(&g.id));
        tables.universes.retain(|u| u.id != id);
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use starforge_types::{GalaxyType, StarType};

    use super::*;

    fn universe() -> Universe {
        Universe {
            id: UniverseId::new(),
            owner_id: OwnerId(7),
            name: String::from("Universe test"),
            seed: 11,
            metadata: serde_json::json!({}),
            created_at: Utc::now(),
        }
    }

    fn galaxy(universe_id: UniverseId) -> Galaxy {
        Galaxy {
            id: GalaxyId::new(),
            universe_id,
            name: String::from("Galaxy 1"),
            seed: 12,
            num_stars: 50_000,
            galaxy_type: GalaxyType::Spiral,
            metadata: serde_json::json!({"origin": "auto"}),
            created_at: Utc::now(),
        }
    }

    fn system(galaxy_id: GalaxyId) -> StarSystem {
        StarSystem {
            id: StarSystemId::new(),
            galaxy_id,
            name: String::from("System 1-1"),
            seed: 13,
            star_type: StarType::RedDwarf,
            position_x: 10,
            position_y: -10,
            metadata: serde_json::json!({}),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn batch_with_missing_parent_is_rejected_whole() {
        let store = MemoryWorldStore::new();
        let u = universe();
        store.insert_universe(&u).await.unwrap();

        let good = galaxy(u.id);
        let orphan = galaxy(UniverseId::new());
        let result = store.insert_galaxies(&[good, orphan]).await;
        assert!(matches!(result, Err(StoreError::Conflict { .. })));

        let stored = store.galaxies_in_universe(u.id).await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn injected_failure_carries_message() {
        let store = MemoryWorldStore::new();
        store
            .fail_stage(GenerationStage::Universe, "disk on fire")
            .await;
        let result = store.insert_universe(&universe()).await;
        assert_eq!(
            result,
            Err(StoreError::Backend {
                message: String::from("disk on fire")
            })
        );

        store.clear_failures().await;
        assert!(store.insert_universe(&universe()).await.is_ok());
    }

    #[tokio::test]
    async fn delete_cascades_down_the_tree() {
        let store = MemoryWorldStore::new();
        let u = universe();
        let g = galaxy(u.id);
        let s = system(g.id);
        assert!(store.insert_universe(&u).await.is_ok());
        assert!(store.insert_galaxies(std::slice::from_ref(&g)).await.is_ok());
        assert!(store.insert_star_systems(std::slice::from_ref(&s)).await.is_ok());

        assert_eq!(store.delete_universe(u.id).await, Ok(true));
        assert_eq!(store.get_universe(u.id).await, Ok(None));
        assert_eq!(store.system_count().await, 0);
        assert_eq!(store.delete_universe(u.id).await, Ok(false));
    }
}
