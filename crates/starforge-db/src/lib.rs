//! `PostgreSQL` persistence for the Starforge universe generator.
//!
//! Implements the two storage seams defined upstream: [`JobStore`] for the
//! work queue and [`WorldStore`] for the generated world tree and its shared
//! ecology. Both share one connection pool.
//!
//! ```text
//! Worker
//!     |
//!     +-- claim / progress / done|error --> PgJobStore   (jobs)
//!     |
//!     +-- stage batches ------------------> PgWorldStore (universes, galaxies,
//!                                                         star_systems, planets,
//!                                                         biomes, lifeforms,
//!                                                         planet_biomes)
//! ```
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool, configuration, migrations
//! - [`job_store`] -- Job Record persistence with `SKIP LOCKED` claiming
//! - [`world_store`] -- Batch world inserts and read queries
//! - [`error`] -- Shared error types
//!
//! [`JobStore`]: starforge_core::JobStore
//! [`WorldStore`]: starforge_world::WorldStore

pub mod error;
pub mod job_store;
pub mod postgres;
pub mod world_store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use job_store::{JobRow, PgJobStore};
pub use postgres::{PostgresConfig, PostgresPool};
pub use world_store::{
    BiomeRow, GalaxyRow, LifeformRow, PgWorldStore, PlanetRow, StarSystemRow, UniverseRow,
};
