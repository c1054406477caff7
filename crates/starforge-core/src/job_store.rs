//! The Job Record store seam and the transition rules every backend shares.
//!
//! ```text
//! queued --claim_next--> running --complete--> done
//!                               \--fail------> error
//! ```
//!
//! Only the worker holding the claim may write progress or perform the
//! terminal transition. Progress never decreases while a record is running.

use async_trait::async_trait;
use starforge_types::{JobId, JobKind, JobRecord, JobStatus, OwnerId, UniverseId};

use crate::error::JobError;

/// Message written when a record is enqueued.
pub const QUEUED_MESSAGE: &str = "Queued";

/// Message written when a worker claims a record.
pub const CLAIM_MESSAGE: &str = "Universe generation started";

/// Message written when generation succeeds.
pub const DONE_MESSAGE: &str = "Universe generation completed";

/// Durable storage of Job Records.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Create a record in `queued` and return it.
    async fn enqueue(&self, owner: OwnerId, kind: JobKind) -> Result<JobRecord, JobError>;

    /// Fetch a record by id.
    async fn get(&self, id: JobId) -> Result<Option<JobRecord>, JobError>;

    /// Atomically move the oldest `queued` record to `running` under
    /// `worker`'s claim. At most one concurrent caller receives any given
    /// record.
    async fn claim_next(&self, worker: &str) -> Result<Option<JobRecord>, JobError>;

    /// Record progress and a status line on a running record.
    async fn update_progress(
        &self,
        id: JobId,
        worker: &str,
        progress: f64,
        message: &str,
    ) -> Result<(), JobError>;

    /// Transition a running record to `done` with progress `1.0`.
    async fn complete(
        &self,
        id: JobId,
        worker: &str,
        universe_id: UniverseId,
    ) -> Result<(), JobError>;

    /// Transition a running record to `error`, keeping its last progress.
    async fn fail(&self, id: JobId, worker: &str, message: &str) -> Result<(), JobError>;

    /// All records of an owner, newest first.
    async fn jobs_for_owner(&self, owner: OwnerId) -> Result<Vec<JobRecord>, JobError>;
}

/// Reject progress values that are not finite fractions.
pub fn validate_progress(value: f64) -> Result<f64, JobError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(JobError::InvalidProgress { value })
    }
}

/// Check that `worker` may move `record` to `to`.
///
/// `to == Running` means "stay running", the check used for progress
/// updates.
pub fn check_claim(record: &JobRecord, worker: &str, to: JobStatus) -> Result<(), JobError> {
    let allowed = record.status == JobStatus::Running
        && (to == JobStatus::Running || record.status.can_transition_to(to));
    if !allowed {
        return Err(JobError::InvalidTransition {
            job_id: record.id,
            from: record.status,
            to,
        });
    }
    if record.claimed_by.as_deref() != Some(worker) {
        return Err(JobError::NotClaimHolder { job_id: record.id });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn record(status: JobStatus, claimed_by: Option<&str>) -> JobRecord {
        let now = Utc::now();
        JobRecord {
            id: JobId::new(),
            kind: JobKind::UniverseGeneration,
            owner_id: OwnerId(1),
            status,
            progress: 0.0,
            message: String::new(),
            claimed_by: claimed_by.map(str::to_owned),
            universe_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn progress_bounds() {
        assert!(validate_progress(0.0).is_ok());
        assert!(validate_progress(1.0).is_ok());
        assert!(validate_progress(-0.1).is_err());
        assert!(validate_progress(1.01).is_err());
        assert!(validate_progress(f64::NAN).is_err());
    }

    #[test]
    fn holder_may_finish_running_job() {
        let r = record(JobStatus::Running, Some("w1"));
        assert!(check_claim(&r, "w1", JobStatus::Running).is_ok());
        assert!(check_claim(&r, "w1", JobStatus::Done).is_ok());
        assert!(check_claim(&r, "w1", JobStatus::Error).is_ok());
    }

    #[test]
    fn other_worker_is_rejected() {
        let r = record(JobStatus::Running, Some("w1"));
        assert_eq!(
            check_claim(&r, "w2", JobStatus::Done),
            Err(JobError::NotClaimHolder { job_id: r.id })
        );
    }

    #[test]
    fn terminal_and_queued_records_reject_updates() {
        for status in [JobStatus::Queued, JobStatus::Done, JobStatus::Error] {
            let r = record(status, Some("w1"));
            assert!(matches!(
                check_claim(&r, "w1", JobStatus::Done),
                Err(JobError::InvalidTransition { .. })
            ));
        }
    }
}
