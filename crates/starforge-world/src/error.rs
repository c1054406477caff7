//! Error types for the `starforge-world` crate.

/// Backend-agnostic persistence failure.
///
/// Storage backends convert their native errors into this type so the
/// generator and the job pipeline never depend on a specific engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backend failed to execute an operation.
    #[error("storage backend error: {message}")]
    Backend {
        /// Backend-provided description.
        message: String,
    },

    /// A write conflicted with existing data.
    #[error("storage conflict: {message}")]
    Conflict {
        /// Description of the conflicting write.
        message: String,
    },
}

/// Errors that abort a universe generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// A stage batch could not be persisted.
    #[error("{source}")]
    Store {
        /// The underlying storage error.
        #[from]
        source: StoreError,
    },

    /// Progress could not be recorded after a committed stage.
    #[error("progress report failed: {message}")]
    Progress {
        /// Description of the reporting failure.
        message: String,
    },

    /// The generation parameters are unusable.
    #[error("invalid generation config: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },
}
