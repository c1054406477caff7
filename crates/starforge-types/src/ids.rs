//! Type-safe identifier wrappers.
//!
//! Persisted entities get a strongly-typed UUID v7 identifier (time-ordered,
//! so creation order and index order agree). Biomes and lifeforms are
//! content-addressed instead: their ids are short hex digests derived from
//! their defining characteristics, so regenerating the same conceptual
//! biome yields the same id.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

/// Generates a newtype wrapper around a content-derived hex string.
macro_rules! define_content_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a Job Record in the work queue.
    JobId
}

define_id! {
    /// Unique identifier for a generated universe (root of the world tree).
    UniverseId
}

define_id! {
    /// Unique identifier for a galaxy within a universe.
    GalaxyId
}

define_id! {
    /// Unique identifier for a star system within a galaxy.
    StarSystemId
}

define_id! {
    /// Unique identifier for a planet within a star system.
    PlanetId
}

define_id! {
    /// Unique identifier for a planet-to-biome link row.
    PlanetBiomeId
}

define_content_id! {
    /// Content-addressed identifier of a biome (12 hex characters).
    BiomeId
}

define_content_id! {
    /// Content-addressed identifier of a lifeform (`life_` + 12 hex characters).
    LifeformId
}

/// Identifier of the user who requested work and owns the resulting universe.
///
/// Users live in the excluded authentication layer; the core only carries
/// their numeric id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct OwnerId(pub i64);

impl OwnerId {
    /// Return the inner numeric value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OwnerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_time_ordered() {
        let first = JobId::new();
        let second = JobId::new();
        assert_ne!(first.into_inner(), Uuid::nil());
        assert!(first <= second);
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = UniverseId::new();
        let json = serde_json::to_string(&original).unwrap();
        let restored: UniverseId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn content_id_displays_raw_string() {
        let id = BiomeId::from(String::from("a1b2c3d4e5f6"));
        assert_eq!(id.to_string(), "a1b2c3d4e5f6");
        assert_eq!(id.as_str(), "a1b2c3d4e5f6");
    }

    #[test]
    fn owner_id_serializes_as_number() {
        let json = serde_json::to_string(&OwnerId(42)).unwrap();
        assert_eq!(json, "42");
    }
}
