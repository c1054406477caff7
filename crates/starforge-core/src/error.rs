//! Error types for the job pipeline.

use starforge_types::{JobId, JobStatus};
use starforge_world::StoreError;

/// Errors raised by Job Record operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JobError {
    /// No Job Record has the given id.
    #[error("job not found: {0}")]
    NotFound(JobId),

    /// The requested change is not an edge of the job state machine.
    #[error("job {job_id}: invalid transition from {from} to {to}")]
    InvalidTransition {
        /// The job.
        job_id: JobId,
        /// Current state.
        from: JobStatus,
        /// Requested state.
        to: JobStatus,
    },

    /// The caller does not hold the claim on the running job.
    #[error("job {job_id}: caller does not hold the claim")]
    NotClaimHolder {
        /// The job.
        job_id: JobId,
    },

    /// A progress value outside `[0.0, 1.0]` (or not finite).
    #[error("progress {value} is outside [0, 1]")]
    InvalidProgress {
        /// The rejected value.
        value: f64,
    },

    /// The backing store failed.
    #[error("job store: {source}")]
    Store {
        /// The underlying storage error.
        #[from]
        source: StoreError,
    },
}
