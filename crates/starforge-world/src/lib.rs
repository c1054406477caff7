//! Staged universe generation for the Starforge universe generator.
//!
//! The generator builds a Universe, its Galaxies, their Star Systems, and
//! their Planets (with biomes and lifeforms on habitable planets) in four
//! strictly sequential stages. Each stage is committed as one batch through
//! the [`WorldStore`] seam before the next begins, so a failure mid-run leaves
//! a well-defined partial tree.
//!
//! # Modules
//!
//! - [`config`] -- Count ranges and toggles that shape a generated universe
//! - [`error`] -- Storage and generation error types
//! - [`generator`] -- The staged generator itself
//! - [`memory`] -- In-memory [`WorldStore`] used by tests and dry runs
//! - [`progress`] -- Stage catalog and the progress-reporting seam
//! - [`store`] -- The [`WorldStore`] persistence trait and planet batch

pub mod config;
pub mod error;
pub mod generator;
pub mod memory;
pub mod progress;
pub mod store;

pub use config::{CountRange, EcologyConfig, GenerationConfig};
pub use error::{GenerationError, StoreError};
pub use generator::{WorldGenerator, draw_seed};
pub use memory::MemoryWorldStore;
pub use progress::{GenerationStage, NoOpProgress, ProgressSink};
pub use store::{PlanetBatch, WorldStore};
