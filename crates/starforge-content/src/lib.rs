//! Synthetic content generation for the Starforge universe generator.
//!
//! Pure functions that turn a caller-supplied random source into fully
//! populated [`Biome`] and [`Lifeform`] descriptions. Nothing here touches
//! storage or global state: the same seed and the same draw order always
//! produce identical output.
//!
//! # Modules
//!
//! - [`catalog`] -- Fixed weighted catalogs and per-archetype profiles
//! - [`naming`] -- The four biome naming strategies
//! - [`biome`] -- Biome generation and derived metrics
//! - [`lifeform`] -- Lifeform generation
//! - [`content_id`] -- Content-addressed identifiers
//!
//! [`Biome`]: starforge_types::Biome
//! [`Lifeform`]: starforge_types::Lifeform

pub mod biome;
pub mod catalog;
pub mod content_id;
pub mod lifeform;
pub mod naming;
mod sample;

pub use biome::{biodiversity, generate_biome, productivity, rarity};
pub use content_id::{biome_id, short_hash};
pub use lifeform::{generate_biome_lifeforms, generate_lifeform, lifeform_count};
pub use naming::generate_biome_name;
