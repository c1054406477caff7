//! Error types for the worker binary.
//!
//! [`StartupError`] wraps every failure that can stop the process before
//! the polling loop starts. Once the loop runs, job failures are recorded
//! on Job Records instead of surfacing here.

/// Top-level start-up error for the worker binary.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: starforge_core::ConfigError,
    },

    /// Connecting to or migrating `PostgreSQL` failed.
    #[error("database error: {source}")]
    Database {
        /// The underlying data-layer error.
        #[from]
        source: starforge_db::DbError,
    },

    /// The generation parameters were rejected.
    #[error("generator error: {source}")]
    Generator {
        /// The underlying generation error.
        #[from]
        source: starforge_world::GenerationError,
    },
}
