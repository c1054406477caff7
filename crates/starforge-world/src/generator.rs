//! Staged universe generation.
//!
//! # Stages
//!
//! 1. Universe row (progress 0.05)
//! 2. Galaxies (0.30)
//! 3. Star systems for every galaxy (0.55)
//! 4. Planets for every system, plus biomes, links, and lifeforms on
//!    habitable planets (0.90)
//!
//! Each stage is one store batch. A stage is reported only after its batch
//! is committed, so the last reported stage always matches what is
//! persisted.
//!
//! # Seeds
//!
//! The universe seed drives galaxy generation. Each galaxy seed drives its
//! star systems, and each system seed drives its planets and ecology.
//! A biome's lifeforms are seeded by the biome id, so a biome stored by an
//! earlier run is reused as is. Regenerating from a seed reproduces every
//! name and attribute; only ids and timestamps differ.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use starforge_content::{generate_biome, generate_biome_lifeforms};
use starforge_types::{
    Biome, Galaxy, GalaxyId, GalaxyType, OwnerId, Planet, PlanetBiome, PlanetBiomeId, PlanetId,
    StarSystem, StarSystemId, StarType, Universe, UniverseId,
};
use tracing::{debug, info};

use crate::config::GenerationConfig;
use crate::error::{GenerationError, StoreError};
use crate::progress::{GenerationStage, ProgressSink};
use crate::store::{PlanetBatch, WorldStore};

/// Largest seed handed out for universes, galaxies, and systems.
pub const MAX_SEED: i64 = 999_999_999;

/// Map extent of star system coordinates on each axis.
const MAP_EXTENT: i32 = 2000;

/// Planet designations by orbital position, starting at the innermost.
const PLANET_LETTERS: &[char] = &[
    'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't',
    'u', 'v', 'w', 'x', 'y', 'z',
];

/// Draw a seed in `1..=MAX_SEED`.
pub fn draw_seed<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(1..=MAX_SEED)
}

fn rng_from_seed(seed: i64) -> StdRng {
    StdRng::seed_from_u64(seed.unsigned_abs())
}

fn planet_name(system_name: &str, position: usize) -> String {
    position
        .checked_sub(1)
        .and_then(|index| PLANET_LETTERS.get(index))
        .map_or_else(
            || format!("{system_name} {position}"),
            |letter| format!("{system_name} {letter}"),
        )
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Builds universes according to a validated [`GenerationConfig`].
#[derive(Debug, Clone)]
pub struct WorldGenerator {
    config: GenerationConfig,
}

impl WorldGenerator {
    /// Create a generator, rejecting an unusable configuration.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this generator runs with.
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate and persist a full universe for `owner` from `seed`.
    ///
    /// On error, every stage before the failing one remains persisted and
    /// the failing stage's batch is absent.
    pub async fn generate_universe<S, P>(
        &self,
        store: &S,
        owner: OwnerId,
        seed: i64,
        progress: &P,
    ) -> Result<UniverseId, GenerationError>
    where
        S: WorldStore + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let mut rng = rng_from_seed(seed);

        // Stage 1: universe
        let universe = self.build_universe(owner, seed);
        let universe_id = universe.id;
        store.insert_universe(&universe).await?;
        info!(%universe_id, %owner, seed, "universe created");
        progress.report(GenerationStage::Universe, 1, 1).await?;

        // Stage 2: galaxies
        let galaxies = self.build_galaxies(&mut rng, universe_id);
        store.insert_galaxies(&galaxies).await?;
        debug!(%universe_id, count = galaxies.len(), "galaxies committed");
        progress
            .report(GenerationStage::Galaxies, galaxies.len(), galaxies.len())
            .await?;

        // Stage 3: star systems
        let systems = self.build_star_systems(&galaxies);
        store.insert_star_systems(&systems).await?;
        debug!(%universe_id, count = systems.len(), "star systems committed");
        progress
            .report(GenerationStage::StarSystems, systems.len(), systems.len())
            .await?;

        // Stage 4: planets and ecology
        let mut batch = self.build_planets(&systems);
        skip_stored_biomes(store, &mut batch).await?;
        store.insert_planets(&batch).await?;
        debug!(
            %universe_id,
            planets = batch.planets.len(),
            biomes = batch.biomes.len(),
            lifeforms = batch.lifeforms.len(),
            "planets committed"
        );
        progress
            .report(
                GenerationStage::Planets,
                batch.planets.len(),
                batch.planets.len(),
            )
            .await?;

        info!(
            %universe_id,
            galaxies = galaxies.len(),
            systems = systems.len(),
            planets = batch.planets.len(),
            "universe generation finished"
        );
        Ok(universe_id)
    }

    fn build_universe(&self, owner: OwnerId, seed: i64) -> Universe {
        let now = Utc::now();
        Universe {
            id: UniverseId::new(),
            owner_id: owner,
            name: format!("Universe {}", now.format("%Y-%m-%d %H:%M:%S")),
            seed,
            metadata: json!({
                "galaxy_count": self.config.galaxy_count,
                "ecology": self.config.ecology.enabled,
            }),
            created_at: now,
        }
    }

    fn build_galaxies(&self, rng: &mut StdRng, universe_id: UniverseId) -> Vec<Galaxy> {
        (1..=self.config.galaxy_count)
            .map(|ordinal| {
                let seed = draw_seed(rng);
                let num_stars = i64::from(self.config.stars_per_galaxy.sample(rng));
                let galaxy_type = GalaxyType::ALL
                    .get(rng.random_range(0..GalaxyType::ALL.len()))
                    .copied()
                    .unwrap_or(GalaxyType::Spiral);
                Galaxy {
                    id: GalaxyId::new(),
                    universe_id,
                    name: format!("Galaxy {ordinal}"),
                    seed,
                    num_stars,
                    galaxy_type,
                    metadata: json!({ "origin": "auto" }),
                    created_at: Utc::now(),
                }
            })
            .collect()
    }

    fn build_star_systems(&self, galaxies: &[Galaxy]) -> Vec<StarSystem> {
        let mut systems = Vec::new();
        for (galaxy_ordinal, galaxy) in (1_u32..).zip(galaxies) {
            let mut rng = rng_from_seed(galaxy.seed);
            let count = self.config.systems_per_galaxy.sample(&mut rng);
            for ordinal in 1..=count {
                let seed = draw_seed(&mut rng);
                let star_type = StarType::ALL
                    .get(rng.random_range(0..StarType::ALL.len()))
                    .copied()
                    .unwrap_or(StarType::YellowDwarf);
                systems.push(StarSystem {
                    id: StarSystemId::new(),
                    galaxy_id: galaxy.id,
                    name: format!("System {galaxy_ordinal}-{ordinal}"),
                    seed,
                    star_type,
                    position_x: rng.random_range(-MAP_EXTENT..=MAP_EXTENT),
                    position_y: rng.random_range(-MAP_EXTENT..=MAP_EXTENT),
                    metadata: json!({}),
                    created_at: Utc::now(),
                });
            }
        }
        systems
    }

    fn build_planets(&self, systems: &[StarSystem]) -> PlanetBatch {
        let mut batch = PlanetBatch::default();
        for system in systems {
            let mut rng = rng_from_seed(system.seed);
            let count = self.config.planets_per_system.sample(&mut rng);
            for position in 1..=count {
                let size = self.config.planet_size.sample(&mut rng);
                let habitable = rng.random::<f64>() < self.config.habitable_weight;
                let planet = Planet {
                    id: PlanetId::new(),
                    system_id: system.id,
                    name: planet_name(&system.name, usize::try_from(position).unwrap_or(0)),
                    size: to_i32(size),
                    position: to_i32(position),
                    habitable,
                    metadata: json!({}),
                    created_at: Utc::now(),
                };
                if habitable && self.config.ecology.enabled {
                    self.populate_ecology(&mut rng, planet.id, &mut batch);
                }
                batch.planets.push(planet);
            }
        }
        batch
    }

    /// Generate biomes (and their lifeforms) for one habitable planet.
    fn populate_ecology(&self, rng: &mut StdRng, planet_id: PlanetId, batch: &mut PlanetBatch) {
        let count = self
            .config
            .ecology
            .biomes_per_habitable_planet
            .sample(rng);
        for _ in 0..count {
            let biome: Biome = generate_biome(rng);
            let already_linked = batch
                .links
                .iter()
                .any(|link| link.planet_id == planet_id && link.biome_id == biome.id);
            if already_linked {
                continue;
            }
            batch.links.push(PlanetBiome {
                id: PlanetBiomeId::new(),
                planet_id,
                biome_id: biome.id.clone(),
                created_at: Utc::now(),
            });
            if batch.biomes.iter().any(|existing| existing.id == biome.id) {
                continue;
            }
            batch.lifeforms.extend(generate_biome_lifeforms(&biome));
            batch.biomes.push(biome);
        }
    }
}

/// Drop biomes an earlier run already stored, together with their
/// lifeforms. Links to them stay in the batch.
async fn skip_stored_biomes<S>(store: &S, batch: &mut PlanetBatch) -> Result<(), StoreError>
where
    S: WorldStore + ?Sized,
{
    let mut stored = Vec::new();
    for biome in &batch.biomes {
        if store.get_biome(&biome.id).await?.is_some() {
            stored.push(biome.id.clone());
        }
    }
    if !stored.is_empty() {
        batch.biomes.retain(|biome| !stored.contains(&biome.id));
        batch
            .lifeforms
            .retain(|lifeform| !stored.contains(&lifeform.biome_id));
        debug!(reused = stored.len(), "biomes already stored");
    }
    Ok(())
}
