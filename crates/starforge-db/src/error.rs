//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`], which wraps the underlying
//! [`sqlx`] and [`serde_json`] errors. At the crate boundary they convert
//! into the backend-agnostic [`StoreError`] (and from there into
//! [`JobError`]) so callers never depend on `PostgreSQL` specifics.

use starforge_core::JobError;
use starforge_types::UnknownVariant;
use starforge_world::StoreError;

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// An attribute group could not be encoded to or decoded from JSONB.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A text column held a value outside its enum's wire names.
    #[error("Decode error: {0}")]
    Decode(#[from] UnknownVariant),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DbError {
    /// Whether the database rejected the write for violating a key or
    /// reference constraint.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Postgres(sqlx::Error::Database(db)) => {
                db.is_unique_violation() || db.is_foreign_key_violation()
            }
            _ => false,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        let message = err.to_string();
        if err.is_constraint_violation() {
            Self::Conflict { message }
        } else {
            Self::Backend { message }
        }
    }
}

impl From<DbError> for JobError {
    fn from(err: DbError) -> Self {
        Self::Store {
            source: StoreError::from(err),
        }
    }
}
