//! `PostgreSQL` [`WorldStore`] over the world tree and ecology tables.
//!
//! Each stage batch is written with `UNNEST`-based multi-row inserts inside
//! one transaction, so a failed batch leaves nothing behind. Biomes and
//! lifeforms are content-addressed: their attribute groups are stored as
//! JSONB and duplicate ids are skipped with `ON CONFLICT DO NOTHING`.
//!
//! Deleting a universe relies on `ON DELETE CASCADE` down to
//! `planet_biomes`; the shared `biomes` and `lifeforms` rows stay.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use starforge_types::{
    Biome, BiomeId, Galaxy, GalaxyId, Lifeform, LifeformId, OwnerId, Planet, PlanetBiome,
    PlanetId, StarSystem, StarSystemId, Universe, UniverseId,
};
use starforge_world::{PlanetBatch, StoreError, WorldStore};
use uuid::Uuid;

use crate::error::DbError;

const BIOME_COLUMNS: &str = "b.id, b.name, b.base_type, b.climate, b.soil, b.vegetation, \
                             b.fauna, b.special_features, b.rarity, b.biodiversity, \
                             b.productivity";

const LIFEFORM_COLUMNS: &str = "id, biome_id, name, domain, trophic_level, reproduction_type, \
                                lifespan_years, adult_size_kg, complexity, anatomy, physiology, \
                                genetics, ecology, special_abilities";

/// World tree and ecology persisted in `PostgreSQL`.
#[derive(Clone)]
pub struct PgWorldStore {
    pool: PgPool,
}

impl PgWorldStore {
    /// Create a world store bound to a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn write_galaxies(&self, galaxies: &[Galaxy]) -> Result<(), DbError> {
        let len = galaxies.len();
        let mut ids = Vec::with_capacity(len);
        let mut universe_ids = Vec::with_capacity(len);
        let mut names = Vec::with_capacity(len);
        let mut seeds = Vec::with_capacity(len);
        let mut star_counts = Vec::with_capacity(len);
        let mut types = Vec::with_capacity(len);
        let mut metadata = Vec::with_capacity(len);
        let mut timestamps = Vec::with_capacity(len);

        for galaxy in galaxies {
            ids.push(galaxy.id.into_inner());
            universe_ids.push(galaxy.universe_id.into_inner());
            names.push(galaxy.name.clone());
            seeds.push(galaxy.seed);
            star_counts.push(galaxy.num_stars);
            types.push(galaxy.galaxy_type.as_str().to_owned());
            metadata.push(galaxy.metadata.clone());
            timestamps.push(galaxy.created_at);
        }

        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r"INSERT INTO galaxies (id, universe_id, name, seed, num_stars, galaxy_type, metadata, created_at)
              SELECT * FROM UNNEST($1::UUID[], $2::UUID[], $3::TEXT[], $4::BIGINT[], $5::BIGINT[], $6::TEXT[], $7::JSONB[], $8::TIMESTAMPTZ[])",
        )
        .bind(&ids)
        .bind(&universe_ids)
        .bind(&names)
        .bind(&seeds)
        .bind(&star_counts)
        .bind(&types)
        .bind(&metadata)
        .bind(&timestamps)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(count = len, "Inserted galaxies (batch UNNEST)");
        Ok(())
    }

    async fn write_star_systems(&self, systems: &[StarSystem]) -> Result<(), DbError> {
        let len = systems.len();
        let mut ids = Vec::with_capacity(len);
        let mut galaxy_ids = Vec::with_capacity(len);
        let mut names = Vec::with_capacity(len);
        let mut seeds = Vec::with_capacity(len);
        let mut types = Vec::with_capacity(len);
        let mut xs = Vec::with_capacity(len);
        let mut ys = Vec::with_capacity(len);
        let mut metadata = Vec::with_capacity(len);
        let mut timestamps = Vec::with_capacity(len);

        for system in systems {
            ids.push(system.id.into_inner());
            galaxy_ids.push(system.galaxy_id.into_inner());
            names.push(system.name.clone());
            seeds.push(system.seed);
            types.push(system.star_type.as_str().to_owned());
            xs.push(system.position_x);
            ys.push(system.position_y);
            metadata.push(system.metadata.clone());
            timestamps.push(system.created_at);
        }

        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r"INSERT INTO star_systems (id, galaxy_id, name, seed, star_type, position_x, position_y, metadata, created_at)
              SELECT * FROM UNNEST($1::UUID[], $2::UUID[], $3::TEXT[], $4::BIGINT[], $5::TEXT[], $6::INTEGER[], $7::INTEGER[], $8::JSONB[], $9::TIMESTAMPTZ[])",
        )
        .bind(&ids)
        .bind(&galaxy_ids)
        .bind(&names)
        .bind(&seeds)
        .bind(&types)
        .bind(&xs)
        .bind(&ys)
        .bind(&metadata)
        .bind(&timestamps)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        tracing::debug!(count = len, "Inserted star systems (batch UNNEST)");
        Ok(())
    }

    async fn write_planet_batch(&self, batch: &PlanetBatch) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;
        insert_planets(&mut tx, &batch.planets).await?;
        insert_biomes(&mut tx, &batch.biomes).await?;
        insert_links(&mut tx, &batch.links).await?;
        insert_lifeforms(&mut tx, &batch.lifeforms).await?;
        tx.commit().await?;

        tracing::debug!(
            planets = batch.planets.len(),
            biomes = batch.biomes.len(),
            links = batch.links.len(),
            lifeforms = batch.lifeforms.len(),
            "Inserted planet batch"
        );
        Ok(())
    }
}

async fn insert_planets(tx: &mut Transaction<'_, Postgres>, planets: &[Planet]) -> Result<(), DbError> {
    if planets.is_empty() {
        return Ok(());
    }
    let len = planets.len();
    let mut ids = Vec::with_capacity(len);
    let mut system_ids = Vec::with_capacity(len);
    let mut names = Vec::with_capacity(len);
    let mut sizes = Vec::with_capacity(len);
    let mut positions = Vec::with_capacity(len);
    let mut habitable = Vec::with_capacity(len);
    let mut metadata = Vec::with_capacity(len);
    let mut timestamps = Vec::with_capacity(len);

    for planet in planets {
        ids.push(planet.id.into_inner());
        system_ids.push(planet.system_id.into_inner());
        names.push(planet.name.clone());
        sizes.push(planet.size);
        positions.push(planet.position);
        habitable.push(planet.habitable);
        metadata.push(planet.metadata.clone());
        timestamps.push(planet.created_at);
    }

    sqlx::query(
        r"INSERT INTO planets (id, system_id, name, size, position, habitable, metadata, created_at)
          SELECT * FROM UNNEST($1::UUID[], $2::UUID[], $3::TEXT[], $4::INTEGER[], $5::INTEGER[], $6::BOOLEAN[], $7::JSONB[], $8::TIMESTAMPTZ[])",
    )
    .bind(&ids)
    .bind(&system_ids)
    .bind(&names)
    .bind(&sizes)
    .bind(&positions)
    .bind(&habitable)
    .bind(&metadata)
    .bind(&timestamps)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn insert_biomes(tx: &mut Transaction<'_, Postgres>, biomes: &[Biome]) -> Result<(), DbError> {
    let mut seen = BTreeSet::new();
    let mut ids = Vec::new();
    let mut names = Vec::new();
    let mut base_types = Vec::new();
    let mut climates = Vec::new();
    let mut soils = Vec::new();
    let mut vegetation = Vec::new();
    let mut fauna = Vec::new();
    let mut features = Vec::new();
    let mut rarity = Vec::new();
    let mut biodiversity = Vec::new();
    let mut productivity = Vec::new();

    for biome in biomes.iter().filter(|b| seen.insert(&b.id)) {
        ids.push(biome.id.as_str().to_owned());
        names.push(biome.name.clone());
        base_types.push(biome.base_type.as_str().to_owned());
        climates.push(serde_json::to_value(&biome.climate)?);
        soils.push(serde_json::to_value(&biome.soil)?);
        vegetation.push(serde_json::to_value(&biome.vegetation)?);
        fauna.push(serde_json::to_value(&biome.fauna)?);
        features.push(serde_json::to_value(&biome.special_features)?);
        rarity.push(biome.rarity);
        biodiversity.push(biome.biodiversity);
        productivity.push(biome.productivity);
    }
    if ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r"INSERT INTO biomes (id, name, base_type, climate, soil, vegetation, fauna, special_features, rarity, biodiversity, productivity)
          SELECT * FROM UNNEST($1::TEXT[], $2::TEXT[], $3::TEXT[], $4::JSONB[], $5::JSONB[], $6::JSONB[], $7::JSONB[], $8::JSONB[], $9::DOUBLE PRECISION[], $10::DOUBLE PRECISION[], $11::DOUBLE PRECISION[])
          ON CONFLICT (id) DO NOTHING",
    )
    .bind(&ids)
    .bind(&names)
    .bind(&base_types)
    .bind(&climates)
    .bind(&soils)
    .bind(&vegetation)
    .bind(&fauna)
    .bind(&features)
    .bind(&rarity)
    .bind(&biodiversity)
    .bind(&productivity)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn insert_links(tx: &mut Transaction<'_, Postgres>, links: &[PlanetBiome]) -> Result<(), DbError> {
    if links.is_empty() {
        return Ok(());
    }
    let len = links.len();
    let mut ids = Vec::with_capacity(len);
    let mut planet_ids = Vec::with_capacity(len);
    let mut biome_ids = Vec::with_capacity(len);
    let mut timestamps = Vec::with_capacity(len);

    for link in links {
        ids.push(link.id.into_inner());
        planet_ids.push(link.planet_id.into_inner());
        biome_ids.push(link.biome_id.as_str().to_owned());
        timestamps.push(link.created_at);
    }

    sqlx::query(
        r"INSERT INTO planet_biomes (id, planet_id, biome_id, created_at)
          SELECT * FROM UNNEST($1::UUID[], $2::UUID[], $3::TEXT[], $4::TIMESTAMPTZ[])
          ON CONFLICT (planet_id, biome_id) DO NOTHING",
    )
    .bind(&ids)
    .bind(&planet_ids)
    .bind(&biome_ids)
    .bind(&timestamps)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn insert_lifeforms(
    tx: &mut Transaction<'_, Postgres>,
    lifeforms: &[Lifeform],
) -> Result<(), DbError> {
    let mut seen = BTreeSet::new();
    let mut ids = Vec::new();
    let mut biome_ids = Vec::new();
    let mut names = Vec::new();
    let mut domains = Vec::new();
    let mut trophic = Vec::new();
    let mut reproduction = Vec::new();
    let mut lifespans = Vec::new();
    let mut sizes = Vec::new();
    let mut complexity = Vec::new();
    let mut anatomy = Vec::new();
    let mut physiology = Vec::new();
    let mut genetics = Vec::new();
    let mut ecology = Vec::new();
    let mut abilities = Vec::new();

    for lifeform in lifeforms.iter().filter(|l| seen.insert(&l.id)) {
        ids.push(lifeform.id.as_str().to_owned());
        biome_ids.push(lifeform.biome_id.as_str().to_owned());
        names.push(lifeform.name.clone());
        domains.push(lifeform.domain.as_str().to_owned());
        trophic.push(lifeform.trophic_level.as_str().to_owned());
        reproduction.push(lifeform.reproduction_type.as_str().to_owned());
        lifespans.push(lifeform.lifespan_years);
        sizes.push(lifeform.adult_size_kg);
        complexity.push(lifeform.complexity.as_str().to_owned());
        anatomy.push(serde_json::to_value(&lifeform.anatomy)?);
        physiology.push(serde_json::to_value(&lifeform.physiology)?);
        genetics.push(serde_json::to_value(&lifeform.genetics)?);
        ecology.push(serde_json::to_value(&lifeform.ecology)?);
        abilities.push(serde_json::to_value(&lifeform.special_abilities)?);
    }
    if ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r"INSERT INTO lifeforms (id, biome_id, name, domain, trophic_level, reproduction_type, lifespan_years, adult_size_kg, complexity, anatomy, physiology, genetics, ecology, special_abilities)
          SELECT * FROM UNNEST($1::TEXT[], $2::TEXT[], $3::TEXT[], $4::TEXT[], $5::TEXT[], $6::TEXT[], $7::DOUBLE PRECISION[], $8::DOUBLE PRECISION[], $9::TEXT[], $10::JSONB[], $11::JSONB[], $12::JSONB[], $13::JSONB[], $14::JSONB[])
          ON CONFLICT (id) DO NOTHING",
    )
    .bind(&ids)
    .bind(&biome_ids)
    .bind(&names)
    .bind(&domains)
    .bind(&trophic)
    .bind(&reproduction)
    .bind(&lifespans)
    .bind(&sizes)
    .bind(&complexity)
    .bind(&anatomy)
    .bind(&physiology)
    .bind(&genetics)
    .bind(&ecology)
    .bind(&abilities)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[async_trait]
impl WorldStore for PgWorldStore {
    async fn insert_universe(&self, universe: &Universe) -> Result<(), StoreError> {
        sqlx::query(
            r"INSERT INTO universes (id, owner_id, name, seed, metadata, created_at)
              VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(universe.id.into_inner())
        .bind(universe.owner_id.into_inner())
        .bind(&universe.name)
        .bind(universe.seed)
        .bind(&universe.metadata)
        .bind(universe.created_at)
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        tracing::debug!(universe_id = %universe.id, "Inserted universe");
        Ok(())
    }

    async fn insert_galaxies(&self, galaxies: &[Galaxy]) -> Result<(), StoreError> {
        if galaxies.is_empty() {
            return Ok(());
        }
        Ok(self.write_galaxies(galaxies).await?)
    }

    async fn insert_star_systems(&self, systems: &[StarSystem]) -> Result<(), StoreError> {
        if systems.is_empty() {
            return Ok(());
        }
        Ok(self.write_star_systems(systems).await?)
    }

    async fn insert_planets(&self, batch: &PlanetBatch) -> Result<(), StoreError> {
        if batch.is_empty() {
            return Ok(());
        }
        Ok(self.write_planet_batch(batch).await?)
    }

    async fn get_universe(&self, id: UniverseId) -> Result<Option<Universe>, StoreError> {
        let row = sqlx::query_as::<_, UniverseRow>(
            r"SELECT id, owner_id, name, seed, metadata, created_at
              FROM universes
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(row.map(Universe::from))
    }

    async fn universes_by_owner(&self, owner: OwnerId) -> Result<Vec<Universe>, StoreError> {
        let rows = sqlx::query_as::<_, UniverseRow>(
            r"SELECT id, owner_id, name, seed, metadata, created_at
              FROM universes
              WHERE owner_id = $1
              ORDER BY created_at, id",
        )
        .bind(owner.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(rows.into_iter().map(Universe::from).collect())
    }

    async fn galaxies_in_universe(&self, id: UniverseId) -> Result<Vec<Galaxy>, StoreError> {
        let rows = sqlx::query_as::<_, GalaxyRow>(
            r"SELECT id, universe_id, name, seed, num_stars, galaxy_type, metadata, created_at
              FROM galaxies
              WHERE universe_id = $1
              ORDER BY created_at, id",
        )
        .bind(id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(convert_all(rows)?)
    }

    async fn systems_in_galaxy(&self, id: GalaxyId) -> Result<Vec<StarSystem>, StoreError> {
        let rows = sqlx::query_as::<_, StarSystemRow>(
            r"SELECT id, galaxy_id, name, seed, star_type, position_x, position_y, metadata, created_at
              FROM star_systems
              WHERE galaxy_id = $1
              ORDER BY created_at, id",
        )
        .bind(id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(convert_all(rows)?)
    }

    async fn planets_in_system(&self, id: StarSystemId) -> Result<Vec<Planet>, StoreError> {
        let rows = sqlx::query_as::<_, PlanetRow>(
            r"SELECT id, system_id, name, size, position, habitable, metadata, created_at
              FROM planets
              WHERE system_id = $1
              ORDER BY position",
        )
        .bind(id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(rows.into_iter().map(Planet::from).collect())
    }

    async fn get_biome(&self, id: &BiomeId) -> Result<Option<Biome>, StoreError> {
        let row = sqlx::query_as::<_, BiomeRow>(&format!(
            "SELECT {BIOME_COLUMNS} FROM biomes b WHERE b.id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(row.map(Biome::try_from).transpose()?)
    }

    async fn biomes_on_planet(&self, id: PlanetId) -> Result<Vec<Biome>, StoreError> {
        let rows = sqlx::query_as::<_, BiomeRow>(&format!(
            r"SELECT {BIOME_COLUMNS}
              FROM planet_biomes pb
              JOIN biomes b ON b.id = pb.biome_id
              WHERE pb.planet_id = $1
              ORDER BY pb.created_at, pb.id"
        ))
        .bind(id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(convert_all(rows)?)
    }

    async fn lifeforms_in_biome(&self, id: &BiomeId) -> Result<Vec<Lifeform>, StoreError> {
        let rows = sqlx::query_as::<_, LifeformRow>(&format!(
            r"SELECT {LIFEFORM_COLUMNS}
              FROM lifeforms
              WHERE biome_id = $1
              ORDER BY id"
        ))
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(convert_all(rows)?)
    }

    async fn delete_universe(&self, id: UniverseId) -> Result<bool, StoreError> {
        let result = sqlx::query(r"DELETE FROM universes WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(universe_id = %id, "Deleted universe");
        }
        Ok(deleted)
    }
}

fn convert_all<R, T>(rows: Vec<R>) -> Result<Vec<T>, DbError>
where
    T: TryFrom<R, Error = DbError>,
{
    rows.into_iter().map(T::try_from).collect()
}

/// A row from the `universes` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UniverseRow {
    /// Universe UUID.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: i64,
    /// Display name.
    pub name: String,
    /// Generation seed.
    pub seed: i64,
    /// Generator metadata.
    pub metadata: serde_json::Value,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<UniverseRow> for Universe {
    fn from(row: UniverseRow) -> Self {
        Self {
            id: UniverseId::from(row.id),
            owner_id: OwnerId(row.owner_id),
            name: row.name,
            seed: row.seed,
            metadata: row.metadata,
            created_at: row.created_at,
        }
    }
}

/// A row from the `galaxies` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GalaxyRow {
    /// Galaxy UUID.
    pub id: Uuid,
    /// Owning universe.
    pub universe_id: Uuid,
    /// Display name.
    pub name: String,
    /// Seed for this galaxy's systems.
    pub seed: i64,
    /// Nominal star count.
    pub num_stars: i64,
    /// Wire name of the morphology.
    pub galaxy_type: String,
    /// Generator metadata.
    pub metadata: serde_json::Value,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl TryFrom<GalaxyRow> for Galaxy {
    type Error = DbError;

    fn try_from(row: GalaxyRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: GalaxyId::from(row.id),
            universe_id: UniverseId::from(row.universe_id),
            name: row.name,
            seed: row.seed,
            num_stars: row.num_stars,
            galaxy_type: row.galaxy_type.parse()?,
            metadata: row.metadata,
            created_at: row.created_at,
        })
    }
}

/// A row from the `star_systems` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StarSystemRow {
    /// System UUID.
    pub id: Uuid,
    /// Owning galaxy.
    pub galaxy_id: Uuid,
    /// Display name.
    pub name: String,
    /// Seed for this system's planets and ecology.
    pub seed: i64,
    /// Wire name of the stellar class.
    pub star_type: String,
    /// Map x coordinate.
    pub position_x: i32,
    /// Map y coordinate.
    pub position_y: i32,
    /// Generator metadata.
    pub metadata: serde_json::Value,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl TryFrom<StarSystemRow> for StarSystem {
    type Error = DbError;

    fn try_from(row: StarSystemRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: StarSystemId::from(row.id),
            galaxy_id: GalaxyId::from(row.galaxy_id),
            name: row.name,
            seed: row.seed,
            star_type: row.star_type.parse()?,
            position_x: row.position_x,
            position_y: row.position_y,
            metadata: row.metadata,
            created_at: row.created_at,
        })
    }
}

/// A row from the `planets` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlanetRow {
    /// Planet UUID.
    pub id: Uuid,
    /// Owning star system.
    pub system_id: Uuid,
    /// Display name.
    pub name: String,
    /// Size class.
    pub size: i32,
    /// Orbital ordinal.
    pub position: i32,
    /// Whether ecology was generated.
    pub habitable: bool,
    /// Generator metadata.
    pub metadata: serde_json::Value,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Self {
            id: PlanetId::from(row.id),
            system_id: StarSystemId::from(row.system_id),
            name: row.name,
            size: row.size,
            position: row.position,
            habitable: row.habitable,
            metadata: row.metadata,
            created_at: row.created_at,
        }
    }
}

/// A row from the `biomes` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BiomeRow {
    /// Content-addressed id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Wire name of the archetype.
    pub base_type: String,
    /// Climate attribute group.
    pub climate: serde_json::Value,
    /// Soil attribute group.
    pub soil: serde_json::Value,
    /// Vegetation attribute group.
    pub vegetation: serde_json::Value,
    /// Fauna attribute group.
    pub fauna: serde_json::Value,
    /// Special feature tags.
    pub special_features: serde_json::Value,
    /// Rarity in `[0, 1]`.
    pub rarity: f64,
    /// Biodiversity in `[0, 1]`.
    pub biodiversity: f64,
    /// Productivity in `[0, 1]`.
    pub productivity: f64,
}

impl TryFrom<BiomeRow> for Biome {
    type Error = DbError;

    fn try_from(row: BiomeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: BiomeId::from(row.id),
            name: row.name,
            base_type: row.base_type.parse()?,
            climate: serde_json::from_value(row.climate)?,
            soil: serde_json::from_value(row.soil)?,
            vegetation: serde_json::from_value(row.vegetation)?,
            fauna: serde_json::from_value(row.fauna)?,
            special_features: serde_json::from_value(row.special_features)?,
            rarity: row.rarity,
            biodiversity: row.biodiversity,
            productivity: row.productivity,
        })
    }
}

/// A row from the `lifeforms` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LifeformRow {
    /// Content-addressed id.
    pub id: String,
    /// Owning biome.
    pub biome_id: String,
    /// Display name.
    pub name: String,
    /// Wire name of the domain.
    pub domain: String,
    /// Wire name of the trophic level.
    pub trophic_level: String,
    /// Wire name of the reproduction strategy.
    pub reproduction_type: String,
    /// Typical lifespan.
    pub lifespan_years: f64,
    /// Typical adult mass.
    pub adult_size_kg: f64,
    /// Wire name of the complexity tier.
    pub complexity: String,
    /// Anatomy attribute group.
    pub anatomy: serde_json::Value,
    /// Physiology attribute group.
    pub physiology: serde_json::Value,
    /// Genetics attribute group.
    pub genetics: serde_json::Value,
    /// Ecology attribute group.
    pub ecology: serde_json::Value,
    /// Special ability tags.
    pub special_abilities: serde_json::Value,
}

impl TryFrom<LifeformRow> for Lifeform {
    type Error = DbError;

    fn try_from(row: LifeformRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LifeformId::from(row.id),
            biome_id: BiomeId::from(row.biome_id),
            name: row.name,
            domain: row.domain.parse()?,
            trophic_level: row.trophic_level.parse()?,
            reproduction_type: row.reproduction_type.parse()?,
            lifespan_years: row.lifespan_years,
            adult_size_kg: row.adult_size_kg,
            complexity: row.complexity.parse()?,
            anatomy: serde_json::from_value(row.anatomy)?,
            physiology: serde_json::from_value(row.physiology)?,
            genetics: serde_json::from_value(row.genetics)?,
            ecology: serde_json::from_value(row.ecology)?,
            special_abilities: serde_json::from_value(row.special_abilities)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use starforge_types::{BiomeType, GalaxyType};

    use super::*;

    #[test]
    fn galaxy_row_parses_wire_names() {
        let row = GalaxyRow {
            id: Uuid::now_v7(),
            universe_id: Uuid::now_v7(),
            name: String::from("Galaxy 1"),
            seed: 7,
            num_stars: 12_000,
            galaxy_type: String::from("spiral"),
            metadata: json!({"origin": "auto"}),
            created_at: Utc::now(),
        };
        let galaxy = Galaxy::try_from(row).unwrap();
        assert_eq!(galaxy.galaxy_type, GalaxyType::Spiral);
        assert_eq!(galaxy.num_stars, 12_000);
    }

    #[test]
    fn biome_row_round_trips_attribute_groups() {
        let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(11);
        let biome = starforge_content::generate_biome(&mut rng);
        let row = BiomeRow {
            id: biome.id.as_str().to_owned(),
            name: biome.name.clone(),
            base_type: biome.base_type.as_str().to_owned(),
            climate: serde_json::to_value(&biome.climate).unwrap(),
            soil: serde_json::to_value(&biome.soil).unwrap(),
            vegetation: serde_json::to_value(&biome.vegetation).unwrap(),
            fauna: serde_json::to_value(&biome.fauna).unwrap(),
            special_features: serde_json::to_value(&biome.special_features).unwrap(),
            rarity: biome.rarity,
            biodiversity: biome.biodiversity,
            productivity: biome.productivity,
        };
        let restored = Biome::try_from(row).unwrap();
        assert_eq!(restored, biome);
    }

    #[test]
    fn malformed_attribute_group_is_a_serialization_error() {
        let row = BiomeRow {
            id: String::from("a1b2c3d4e5f6"),
            name: String::from("Glass Flats"),
            base_type: BiomeType::Desert.as_str().to_owned(),
            climate: json!({"temperature_c": "hot"}),
            soil: json!({}),
            vegetation: json!({}),
            fauna: json!({}),
            special_features: json!([]),
            rarity: 0.1,
            biodiversity: 0.1,
            productivity: 0.1,
        };
        assert!(matches!(
            Biome::try_from(row),
            Err(DbError::Serialization(_))
        ));
    }
}
