//! Enqueue and status polling, the surface consumed by the HTTP layer.

use starforge_types::{JobId, JobKind, JobStatusReport, OwnerId};
use tracing::info;

use crate::error::JobError;
use crate::job_store::JobStore;

/// Create a `queued` universe-generation job for `owner`.
pub async fn enqueue_job<S: JobStore + ?Sized>(store: &S, owner: OwnerId) -> Result<JobId, JobError> {
    let record = store.enqueue(owner, JobKind::UniverseGeneration).await?;
    info!(job_id = %record.id, %owner, "job enqueued");
    Ok(record.id)
}

/// Current status of a job, or `None` when no such job exists.
///
/// Reads the record as stored; nothing is cached.
pub async fn get_job_status<S: JobStore + ?Sized>(
    store: &S,
    id: JobId,
) -> Result<Option<JobStatusReport>, JobError> {
    let record = store.get(id).await?;
    Ok(record.as_ref().map(JobStatusReport::from))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use starforge_types::JobStatus;

    use super::*;
    use crate::memory::MemoryJobStore;

    #[tokio::test]
    async fn status_of_new_job_is_queued() {
        let store = MemoryJobStore::new();
        let id = enqueue_job(&store, OwnerId(42)).await.unwrap();
        let report = get_job_status(&store, id).await.unwrap().unwrap();
        assert_eq!(report.id, id);
        assert_eq!(report.status, JobStatus::Queued);
        assert!(report.progress.abs() < f64::EPSILON);
        assert_eq!(report.message, "Queued");
    }

    #[tokio::test]
    async fn unknown_job_reports_none() {
        let store = MemoryJobStore::new();
        let report = get_job_status(&store, JobId::new()).await;
        assert_eq!(report, Ok(None));
    }
}
