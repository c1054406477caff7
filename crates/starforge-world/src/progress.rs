//! Generation stages and the progress-reporting seam.
//!
//! The generator reports once per committed stage. Each stage has a fixed
//! completion mark on the `[0.0, 1.0]` scale; the terminal `1.0` belongs to
//! the job pipeline, not to the generator.

use async_trait::async_trait;

use crate::error::GenerationError;

/// One fully committed phase of hierarchical generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GenerationStage {
    /// The Universe row.
    Universe,
    /// All Galaxies of the universe.
    Galaxies,
    /// All Star Systems of every galaxy.
    StarSystems,
    /// All Planets, with biomes and lifeforms on habitable ones.
    Planets,
}

impl GenerationStage {
    /// Every stage, in execution order.
    pub const ALL: &'static [Self] = &[
        Self::Universe,
        Self::Galaxies,
        Self::StarSystems,
        Self::Planets,
    ];

    /// Completion fraction reported once the stage is committed.
    pub const fn progress(self) -> f64 {
        match self {
            Self::Universe => 0.05,
            Self::Galaxies => 0.30,
            Self::StarSystems => 0.55,
            Self::Planets => 0.90,
        }
    }

    /// Stage name passed to progress sinks and written into status messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Universe => "universe",
            Self::Galaxies => "galaxies",
            Self::StarSystems => "star_systems",
            Self::Planets => "planets",
        }
    }
}

impl core::fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Receives a report after each committed stage.
///
/// A failing report aborts generation: progress that cannot be recorded
/// means the job no longer reflects what has been persisted.
#[async_trait]
pub trait ProgressSink: Send + Sync {
    /// Called with the stage and how many of its entities were created.
    async fn report(
        &self,
        stage: GenerationStage,
        completed: usize,
        total: usize,
    ) -> Result<(), GenerationError>;
}

/// Sink that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProgress;

#[async_trait]
impl ProgressSink for NoOpProgress {
    async fn report(
        &self,
        _stage: GenerationStage,
        _completed: usize,
        _total: usize,
    ) -> Result<(), GenerationError> {
        Ok(())
    }
}
