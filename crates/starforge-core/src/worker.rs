//! The polling worker.
//!
//! One sequential loop: poll for the oldest queued job, claim it, run the
//! world generator with a progress sink that writes back to the record, then
//! perform the terminal transition. When the queue is empty the loop sleeps
//! one polling interval. Errors outside generation are logged and the loop
//! carries on after the polling delay.
//!
//! A claimed job always runs to completion or failure; the shutdown signal
//! is only observed between polls. The terminal write is retried on storage
//! errors, and a completion that still cannot be recorded falls back to
//! `error`, so a claimed record never stays `running`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use starforge_types::{JobId, JobRecord, JobStatus, UniverseId};
use starforge_world::{
    GenerationError, GenerationStage, ProgressSink, WorldGenerator, WorldStore, draw_seed,
};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::config::WorkerConfig;
use crate::error::JobError;
use crate::job_store::JobStore;

/// Attempts at one terminal write before giving up on it.
const TERMINAL_WRITE_ATTEMPTS: u32 = 3;

/// Pause between terminal write attempts.
const TERMINAL_RETRY_DELAY: Duration = Duration::from_millis(200);

/// Failures of the loop machinery itself (not of a generation run).
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    /// The job store rejected or failed an operation.
    #[error("job store error: {source}")]
    Job {
        /// The underlying job error.
        #[from]
        source: JobError,
    },
}

/// What a single poll did.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// No queued job was available.
    Idle,
    /// A job was claimed and generation succeeded.
    Completed {
        /// The job.
        job_id: JobId,
        /// The generated universe.
        universe_id: UniverseId,
    },
    /// A job was claimed and generation failed; the record is in `error`.
    Failed {
        /// The job.
        job_id: JobId,
        /// The message recorded on the job.
        message: String,
    },
}

/// The terminal transition a finished run asks for.
#[derive(Debug, Clone, Copy)]
enum Terminal<'a> {
    Done(UniverseId),
    Error(&'a str),
}

impl Terminal<'_> {
    const fn status(self) -> JobStatus {
        match self {
            Self::Done(_) => JobStatus::Done,
            Self::Error(_) => JobStatus::Error,
        }
    }
}

/// Writes stage reports onto the claimed Job Record.
struct JobProgress<'a> {
    jobs: &'a dyn JobStore,
    job_id: JobId,
    worker: &'a str,
}

#[async_trait]
impl ProgressSink for JobProgress<'_> {
    async fn report(
        &self,
        stage: GenerationStage,
        completed: usize,
        total: usize,
    ) -> Result<(), GenerationError> {
        let message = format!("{}: {completed}/{total}", stage.label());
        debug!(job_id = %self.job_id, %stage, completed, total, "stage committed");
        self.jobs
            .update_progress(self.job_id, self.worker, stage.progress(), &message)
            .await
            .map_err(|e| GenerationError::Progress {
                message: e.to_string(),
            })
    }
}

/// Polls the job store and executes universe generation jobs.
pub struct Worker {
    jobs: Arc<dyn JobStore>,
    world: Arc<dyn WorldStore>,
    generator: WorldGenerator,
    config: WorkerConfig,
    seeds: StdRng,
}

impl Worker {
    /// Create a worker. Per-job seeds come from `config.seed` when set,
    /// otherwise from OS entropy.
    pub fn new(
        jobs: Arc<dyn JobStore>,
        world: Arc<dyn WorldStore>,
        generator: WorldGenerator,
        config: WorkerConfig,
    ) -> Self {
        let seeds = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            jobs,
            world,
            generator,
            config,
            seeds,
        }
    }

    /// Identity recorded on claimed jobs.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Run until `shutdown` turns `true` (or its sender is dropped).
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        let interval = Duration::from_millis(self.config.poll_interval_ms);
        info!(
            worker = %self.config.name,
            poll_interval_ms = self.config.poll_interval_ms,
            "worker started"
        );

        loop {
            if *shutdown.borrow() {
                break;
            }
            let idle = match self.run_once().await {
                Ok(PollOutcome::Idle) => true,
                Ok(_) => false,
                Err(e) => {
                    error!(worker = %self.config.name, error = %e, "worker poll failed");
                    true
                }
            };
            if idle {
                tokio::select! {
                    () = tokio::time::sleep(interval) => {}
                    changed = shutdown.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        }

        info!(worker = %self.config.name, "worker stopped");
    }

    /// One poll: claim the oldest queued job, if any, and execute it.
    pub async fn run_once(&mut self) -> Result<PollOutcome, WorkerError> {
        let Some(job) = self.jobs.claim_next(&self.config.name).await? else {
            return Ok(PollOutcome::Idle);
        };
        info!(job_id = %job.id, owner = %job.owner_id, worker = %self.config.name, "job claimed");
        self.execute(&job).await
    }

    async fn execute(&mut self, job: &JobRecord) -> Result<PollOutcome, WorkerError> {
        let seed = draw_seed(&mut self.seeds);
        let sink = JobProgress {
            jobs: self.jobs.as_ref(),
            job_id: job.id,
            worker: &self.config.name,
        };
        let result = self
            .generator
            .generate_universe(self.world.as_ref(), job.owner_id, seed, &sink)
            .await;

        match result {
            Ok(universe_id) => match self.finish(job.id, Terminal::Done(universe_id)).await {
                Ok(()) => {
                    info!(job_id = %job.id, %universe_id, "job completed");
                    Ok(PollOutcome::Completed {
                        job_id: job.id,
                        universe_id,
                    })
                }
                Err(e) => {
                    error!(job_id = %job.id, %universe_id, error = %e, "could not record completion");
                    let message =
                        format!("universe {universe_id} was generated but not recorded: {e}");
                    self.finish(job.id, Terminal::Error(&message)).await?;
                    Ok(PollOutcome::Failed {
                        job_id: job.id,
                        message,
                    })
                }
            },
            Err(e) => {
                let message = e.to_string();
                warn!(job_id = %job.id, error = %message, "universe generation failed");
                self.finish(job.id, Terminal::Error(&message)).await?;
                Ok(PollOutcome::Failed {
                    job_id: job.id,
                    message,
                })
            }
        }
    }

    /// Perform a terminal transition, retrying storage errors up to
    /// [`TERMINAL_WRITE_ATTEMPTS`] times.
    ///
    /// A retry rejected as an invalid transition counts as success when the
    /// record already shows the requested state under this worker's claim:
    /// the earlier attempt landed and only its reply was lost.
    async fn finish(&self, job_id: JobId, terminal: Terminal<'_>) -> Result<(), JobError> {
        let worker = self.config.name.as_str();
        let mut attempt = 1;
        loop {
            let result = match terminal {
                Terminal::Done(universe_id) => {
                    self.jobs.complete(job_id, worker, universe_id).await
                }
                Terminal::Error(message) => self.jobs.fail(job_id, worker, message).await,
            };
            match result {
                Err(JobError::Store { source }) if attempt < TERMINAL_WRITE_ATTEMPTS => {
                    warn!(%job_id, attempt, error = %source, "terminal write failed, retrying");
                    tokio::time::sleep(TERMINAL_RETRY_DELAY).await;
                    attempt = attempt.saturating_add(1);
                }
                Err(e @ JobError::InvalidTransition { .. }) if attempt > 1 => {
                    let landed = self.jobs.get(job_id).await?.is_some_and(|record| {
                        record.status == terminal.status()
                            && record.claimed_by.as_deref() == Some(worker)
                    });
                    return if landed { Ok(()) } else { Err(e) };
                }
                other => return other,
            }
        }
    }
}
