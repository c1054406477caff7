//! In-process [`JobStore`].
//!
//! Every operation runs under one lock, which makes the claim a single
//! conditional transition.

use async_trait::async_trait;
use chrono::Utc;
use starforge_types::{JobId, JobKind, JobRecord, JobStatus, OwnerId, UniverseId};
use tokio::sync::Mutex;

use crate::error::JobError;
use crate::job_store::{
    CLAIM_MESSAGE, DONE_MESSAGE, JobStore, QUEUED_MESSAGE, check_claim, validate_progress,
};

/// Job Records held in memory.
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    records: Mutex<Vec<JobRecord>>,
}

impl MemoryJobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn find_mut(records: &mut [JobRecord], id: JobId) -> Result<&mut JobRecord, JobError> {
    records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(JobError::NotFound(id))
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn enqueue(&self, owner: OwnerId, kind: JobKind) -> Result<JobRecord, JobError> {
        let now = Utc::now();
        let record = JobRecord {
            id: JobId::new(),
            kind,
            owner_id: owner,
            status: JobStatus::Queued,
            progress: 0.0,
            message: String::from(QUEUED_MESSAGE),
            claimed_by: None,
            universe_id: None,
            created_at: now,
            updated_at: now,
        };
        self.records.lock().await.push(record.clone());
        Ok(record)
    }

    async fn get(&self, id: JobId) -> Result<Option<JobRecord>, JobError> {
        let records = self.records.lock().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn claim_next(&self, worker: &str) -> Result<Option<JobRecord>, JobError> {
        let mut records = self.records.lock().await;
        let oldest = records
            .iter_mut()
            .filter(|r| r.status == JobStatus::Queued)
            .min_by_key(|r| (r.created_at, r.id));
        let Some(record) = oldest else {
            return Ok(None);
        };
        record.status = JobStatus::Running;
        record.claimed_by = Some(worker.to_owned());
        record.message = String::from(CLAIM_MESSAGE);
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }

    async fn update_progress(
        &self,
        id: JobId,
        worker: &str,
        progress: f64,
        message: &str,
    ) -> Result<(), JobError> {
        let progress = validate_progress(progress)?;
        let mut records = self.records.lock().await;
        let record = find_mut(&mut records, id)?;
        check_claim(record, worker, JobStatus::Running)?;
        record.progress = record.progress.max(progress);
        message.clone_into(&mut record.message);
        record.updated_at = Utc::now();
        Ok(())
    }

    async fn complete(
        &self,
        id: JobId,
        worker: &str,
        universe_id: UniverseId,
    ) -> Result<(), JobError> {
        let mut records = self.records.lock().await;
        let record = find_mut(&mut records, id)?;
        check_claim(record, worker, JobStatus::Done)?;
        record.status = JobStatus::Done;
        record.progress = 1.0;
        record.message = String::from(DONE_MESSAGE);
        record.universe_id = Some(universe_id);
        record.updated_at = Utc::now();
        Ok(())
    }

    async fn fail(&self, id: JobId, worker: &str, message: &str) -> Result<(), JobError> {
        let mut records = self.records.lock().await;
        let record = find_mut(&mut records, id)?;
        check_claim(record, worker, JobStatus::Error)?;
        record.status = JobStatus::Error;
        message.clone_into(&mut record.message);
        record.updated_at = Utc::now();
        Ok(())
    }

    async fn jobs_for_owner(&self, owner: OwnerId) -> Result<Vec<JobRecord>, JobError> {
        let records = self.records.lock().await;
        let mut owned: Vec<JobRecord> = records
            .iter()
            .filter(|r| r.owner_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(owned)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use std::sync::Arc;

    use super::*;

    async fn enqueue(store: &MemoryJobStore, owner: i64) -> JobId {
        store
            .enqueue(OwnerId(owner), JobKind::UniverseGeneration)
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn enqueue_creates_queued_record() {
        let store = MemoryJobStore::new();
        let record = store
            .enqueue(OwnerId(42), JobKind::UniverseGeneration)
            .await
            .unwrap();
        assert_eq!(record.status, JobStatus::Queued);
        assert!(record.progress.abs() < f64::EPSILON);
        assert!(record.claimed_by.is_none());
        assert_eq!(store.get(record.id).await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn claims_are_fifo() {
        let store = MemoryJobStore::new();
        let first = enqueue(&store, 1).await;
        let second = enqueue(&store, 2).await;

        let a = store.claim_next("w").await.unwrap().unwrap();
        let b = store.claim_next("w").await.unwrap().unwrap();
        assert_eq!(a.id, first);
        assert_eq!(b.id, second);
        assert_eq!(a.status, JobStatus::Running);
        assert_eq!(a.claimed_by.as_deref(), Some("w"));
        assert!(store.claim_next("w").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_claims_are_exclusive() {
        let store = Arc::new(MemoryJobStore::new());
        enqueue(&store, 9).await;

        let mut handles = Vec::new();
        for n in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.claim_next(&format!("worker-{n}")).await.unwrap()
            }));
        }
        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
    }

    #[tokio::test]
    async fn progress_is_monotonic_and_holder_only() {
        let store = MemoryJobStore::new();
        let id = enqueue(&store, 3).await;
        assert!(store.claim_next("holder").await.unwrap().is_some());

        store
            .update_progress(id, "holder", 0.55, "star_systems: 20/20")
            .await
            .unwrap();
        store
            .update_progress(id, "holder", 0.30, "late report")
            .await
            .unwrap();
        let record = store.get(id).await.unwrap().unwrap();
        assert!((record.progress - 0.55).abs() < f64::EPSILON);
        assert_eq!(record.message, "late report");

        assert_eq!(
            store.update_progress(id, "intruder", 0.9, "x").await,
            Err(JobError::NotClaimHolder { job_id: id })
        );
        assert_eq!(
            store.update_progress(id, "holder", 1.5, "x").await,
            Err(JobError::InvalidProgress { value: 1.5 })
        );
    }

    #[tokio::test]
    async fn terminal_records_cannot_change() {
        let store = MemoryJobStore::new();
        let id = enqueue(&store, 4).await;
        assert!(store.claim_next("w").await.unwrap().is_some());
        store.fail(id, "w", "boom").await.unwrap();

        assert!(matches!(
            store.complete(id, "w", UniverseId::new()).await,
            Err(JobError::InvalidTransition { from: JobStatus::Error, .. })
        ));
        assert!(matches!(
            store.update_progress(id, "w", 0.9, "x").await,
            Err(JobError::InvalidTransition { .. })
        ));
        let record = store.get(id).await.unwrap().unwrap();
        assert_eq!(record.status, JobStatus::Error);
        assert_eq!(record.message, "boom");
    }

    #[tokio::test]
    async fn unknown_job_is_not_found() {
        let store = MemoryJobStore::new();
        let id = JobId::new();
        assert_eq!(store.fail(id, "w", "x").await, Err(JobError::NotFound(id)));
        assert_eq!(store.get(id).await, Ok(None));
    }

    #[tokio::test]
    async fn owner_listing_is_newest_first() {
        let store = MemoryJobStore::new();
        let older = enqueue(&store, 5).await;
        let newer = enqueue(&store, 5).await;
        enqueue(&store, 6).await;

        let jobs = store.jobs_for_owner(OwnerId(5)).await.unwrap();
        let ids: Vec<JobId> = jobs.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![newer, older]);
    }
}
