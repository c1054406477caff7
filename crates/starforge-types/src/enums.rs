//! Enumeration types for the Starforge universe generator.
//!
//! Every enum here has a stable `snake_case` wire name used for JSON, for
//! `PostgreSQL` text columns, and for content hashing. The catalogs
//! (galaxy morphology, stellar class, biome archetype, taxonomy) are fixed:
//! they are static configuration, never adjusted at runtime.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A wire name did not match any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    /// Name of the enum being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Implements `ALL`, `as_str`, `Display`, and `FromStr` from a variant/name table.
macro_rules! wire_names {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable `snake_case` wire name.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Job lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle state of a Job Record.
///
/// ```text
/// queued --> running --> done
///                   \--> error
/// ```
///
/// `done` and `error` are terminal. A record is created only in `queued`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum JobStatus {
    /// Waiting for a worker to claim it.
    Queued,
    /// Claimed by a worker and executing.
    Running,
    /// Finished successfully.
    Done,
    /// Finished with a failure; `message` holds the cause.
    Error,
}

wire_names!(JobStatus, "job status", {
    Queued => "queued",
    Running => "running",
    Done => "done",
    Error => "error",
});

impl JobStatus {
    /// Whether no further transition can leave this state.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Error)
    }

    /// Whether `self -> next` is an edge of the state machine.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Queued, Self::Running) | (Self::Running, Self::Done | Self::Error)
        )
    }
}

/// The kind of work a Job Record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum JobKind {
    /// Generate a full universe tree for the owner.
    UniverseGeneration,
}

wire_names!(JobKind, "job kind", {
    UniverseGeneration => "universe_generation",
});

// ---------------------------------------------------------------------------
// World structure catalogs
// ---------------------------------------------------------------------------

/// Galaxy morphology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum GalaxyType {
    /// Disk with spiral arms.
    Spiral,
    /// Smooth ellipsoidal distribution.
    Elliptical,
    /// No regular structure.
    Irregular,
}

wire_names!(GalaxyType, "galaxy type", {
    Spiral => "spiral",
    Elliptical => "elliptical",
    Irregular => "irregular",
});

/// Stellar classification of a star system's primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum StarType {
    /// Small, cool main-sequence star.
    RedDwarf,
    /// Sun-like main-sequence star.
    YellowDwarf,
    /// Massive, hot, luminous star.
    BlueGiant,
    /// Stellar remnant, dense and dim.
    WhiteDwarf,
    /// Evolved, expanded star.
    RedGiant,
    /// Collapsed core remnant.
    NeutronStar,
    /// Two stars orbiting a common center.
    BinaryStars,
    /// Gravitational singularity.
    BlackHole,
}

wire_names!(StarType, "star type", {
    RedDwarf => "red_dwarf",
    YellowDwarf => "yellow_dwarf",
    BlueGiant => "blue_giant",
    WhiteDwarf => "white_dwarf",
    RedGiant => "red_giant",
    NeutronStar => "neutron_star",
    BinaryStars => "binary_stars",
    BlackHole => "black_hole",
});

// ---------------------------------------------------------------------------
// Ecology catalogs
// ---------------------------------------------------------------------------

/// Biome archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum BiomeType {
    /// Tree-dominated temperate or tropical land.
    Forest,
    /// Open grass plains.
    Grassland,
    /// Saturated marsh and swamp.
    Wetland,
    /// Arid, sparse land.
    Desert,
    /// High-altitude, cold terrain.
    Alpine,
    /// Oceanic and coastal waters.
    Marine,
    /// Geothermally active land.
    Volcanic,
    /// Subterranean cave systems.
    Cavernous,
    /// Mineral-lattice landscapes.
    Crystalline,
    /// Fungus-dominated ecosystems.
    Fungal,
    /// Bioluminescent ecosystems.
    Luminous,
    /// Suspended, airborne landmasses.
    Floating,
}

wire_names!(BiomeType, "biome type", {
    Forest => "forest",
    Grassland => "grassland",
    Wetland => "wetland",
    Desert => "desert",
    Alpine => "alpine",
    Marine => "marine",
    Volcanic => "volcanic",
    Cavernous => "cavernous",
    Crystalline => "crystalline",
    Fungal => "fungal",
    Luminous => "luminous",
    Floating => "floating",
});

impl BiomeType {
    /// Whether vegetation is drawn from the exotic catalogs.
    pub const fn is_exotic(self) -> bool {
        matches!(self, Self::Crystalline | Self::Luminous | Self::Floating)
    }

    /// Title-cased name used as a lifeform name prefix (`"Forest"`).
    pub const fn title(self) -> &'static str {
        match self {
            Self::Forest => "Forest",
            Self::Grassland => "Grassland",
            Self::Wetland => "Wetland",
            Self::Desert => "Desert",
            Self::Alpine => "Alpine",
            Self::Marine => "Marine",
            Self::Volcanic => "Volcanic",
            Self::Cavernous => "Cavernous",
            Self::Crystalline => "Crystalline",
            Self::Fungal => "Fungal",
            Self::Luminous => "Luminous",
            Self::Floating => "Floating",
        }
    }
}

/// Taxonomic-style domain of a lifeform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum LifeDomain {
    /// Cellular life with nuclei.
    Eukarya,
    /// Prokaryotic bacteria.
    Bacteria,
    /// Prokaryotic archaea.
    Archaea,
    /// Artificial or engineered life.
    Synthetica,
    /// Life with no terrestrial analogue.
    Exobiota,
}

wire_names!(LifeDomain, "life domain", {
    Eukarya => "eukarya",
    Bacteria => "bacteria",
    Archaea => "archaea",
    Synthetica => "synthetica",
    Exobiota => "exobiota",
});

/// Position of a lifeform in the food web.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TrophicLevel {
    /// Produces its own energy.
    Autotroph,
    /// Eats producers.
    Herbivore,
    /// Eats consumers.
    Carnivore,
    /// Eats both.
    Omnivore,
    /// Eats dead matter.
    Detritivore,
}

wire_names!(TrophicLevel, "trophic level", {
    Autotroph => "autotroph",
    Herbivore => "herbivore",
    Carnivore => "carnivore",
    Omnivore => "omnivore",
    Detritivore => "detritivore",
});

/// How a lifeform reproduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ReproductionType {
    /// Two-parent recombination.
    Sexual,
    /// Single-parent cloning.
    Asexual,
    /// Offspring grow as outgrowths.
    Budding,
    /// Dispersed spores.
    Spores,
    /// Body splits into viable pieces.
    Fragmentation,
    /// Unfertilized development.
    Parthenogenesis,
}

wire_names!(ReproductionType, "reproduction type", {
    Sexual => "sexual",
    Asexual => "asexual",
    Budding => "budding",
    Spores => "spores",
    Fragmentation => "fragmentation",
    Parthenogenesis => "parthenogenesis",
});

/// Organizational complexity tier of a lifeform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Complexity {
    /// Single-celled.
    Microbial,
    /// Few tissue types.
    Simple,
    /// Organ systems.
    Intermediate,
    /// Large, differentiated organisms.
    Complex,
    /// Capable of abstract thought.
    Sapient,
}

wire_names!(Complexity, "complexity", {
    Microbial => "microbial",
    Simple => "simple",
    Intermediate => "intermediate",
    Complex => "complex",
    Sapient => "sapient",
});

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn job_status_transitions() {
        assert!(JobStatus::Queued.can_transition_to(JobStatus::Running));
        assert!(JobStatus::Running.can_transition_to(JobStatus::Done));
        assert!(JobStatus::Running.can_transition_to(JobStatus::Error));

        assert!(!JobStatus::Queued.can_transition_to(JobStatus::Done));
        assert!(!JobStatus::Running.can_transition_to(JobStatus::Queued));
        for next in JobStatus::ALL {
            assert!(!JobStatus::Done.can_transition_to(*next));
            assert!(!JobStatus::Error.can_transition_to(*next));
        }
    }

    #[test]
    fn terminal_states() {
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Done.is_terminal());
        assert!(JobStatus::Error.is_terminal());
    }

    #[test]
    fn wire_names_match_serde() {
        for status in JobStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        for star in StarType::ALL {
            let json = serde_json::to_string(star).unwrap();
            assert_eq!(json, format!("\"{}\"", star.as_str()));
        }
    }

    #[test]
    fn parse_round_trips_and_rejects_unknown() {
        for biome in BiomeType::ALL {
            assert_eq!(biome.as_str().parse::<BiomeType>().unwrap(), *biome);
        }
        let err = "lava_lamp".parse::<BiomeType>();
        assert_eq!(
            err,
            Err(UnknownVariant {
                kind: "biome type",
                value: String::from("lava_lamp"),
            })
        );
    }

    #[test]
    fn exotic_biomes() {
        let exotic: Vec<BiomeType> = BiomeType::ALL
            .iter()
            .copied()
            .filter(|b| b.is_exotic())
            .collect();
        assert_eq!(
            exotic,
            vec![BiomeType::Crystalline, BiomeType::Luminous, BiomeType::Floating]
        );
    }
}
