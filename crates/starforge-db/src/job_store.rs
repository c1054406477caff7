//! `PostgreSQL` [`JobStore`] over the `jobs` table.
//!
//! The claim is one statement: the oldest queued row is locked with
//! `FOR UPDATE SKIP LOCKED` and flipped to `running` in the same `UPDATE`,
//! so concurrent workers never receive the same record. Every later write is
//! conditional on `status = 'running' AND claimed_by = $worker`; when such a
//! write touches no row, the record is re-read to report why.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use starforge_core::job_store::{
    CLAIM_MESSAGE, DONE_MESSAGE, QUEUED_MESSAGE, check_claim, validate_progress,
};
use starforge_core::{JobError, JobStore};
use starforge_types::{JobId, JobKind, JobRecord, JobStatus, OwnerId, UniverseId};
use uuid::Uuid;

use crate::error::DbError;

const JOB_COLUMNS: &str = "id, job_type, owner_id, status, progress, message, claimed_by, \
                           universe_id, created_at, updated_at";

/// Job Records persisted in `PostgreSQL`.
#[derive(Clone)]
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    /// Create a job store bound to a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Re-read a record after a conditional write matched nothing and name
    /// the rule it broke.
    async fn diagnose(&self, id: JobId, worker: &str, to: JobStatus) -> JobError {
        match self.get(id).await {
            Ok(None) => JobError::NotFound(id),
            Ok(Some(record)) => check_claim(&record, worker, to)
                .err()
                .unwrap_or(JobError::NotClaimHolder { job_id: id }),
            Err(e) => e,
        }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn enqueue(&self, owner: OwnerId, kind: JobKind) -> Result<JobRecord, JobError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            r"INSERT INTO jobs (id, job_type, owner_id, status, progress, message)
              VALUES ($1, $2, $3, $4, 0, $5)
              RETURNING {JOB_COLUMNS}"
        ))
        .bind(JobId::new().into_inner())
        .bind(kind.as_str())
        .bind(owner.into_inner())
        .bind(JobStatus::Queued.as_str())
        .bind(QUEUED_MESSAGE)
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(JobRecord::try_from(row)?)
    }

    async fn get(&self, id: JobId) -> Result<Option<JobRecord>, JobError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(row.map(JobRecord::try_from).transpose()?)
    }

    async fn claim_next(&self, worker: &str) -> Result<Option<JobRecord>, JobError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            r"UPDATE jobs
              SET status = $1, claimed_by = $2, message = $3, updated_at = now()
              WHERE id = (
                  SELECT id FROM jobs
                  WHERE status = $4
                  ORDER BY created_at, id
                  LIMIT 1
                  FOR UPDATE SKIP LOCKED
              )
              RETURNING {JOB_COLUMNS}"
        ))
        .bind(JobStatus::Running.as_str())
        .bind(worker)
        .bind(CLAIM_MESSAGE)
        .bind(JobStatus::Queued.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(row.map(JobRecord::try_from).transpose()?)
    }

    async fn update_progress(
        &self,
        id: JobId,
        worker: &str,
        progress: f64,
        message: &str,
    ) -> Result<(), JobError> {
        let progress = validate_progress(progress)?;
        let result = sqlx::query(
            r"UPDATE jobs
              SET progress = GREATEST(progress, $3), message = $4, updated_at = now()
              WHERE id = $1 AND status = $5 AND claimed_by = $2",
        )
        .bind(id.into_inner())
        .bind(worker)
        .bind(progress)
        .bind(message)
        .bind(JobStatus::Running.as_str())
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(self.diagnose(id, worker, JobStatus::Running).await);
        }
        Ok(())
    }

    async fn complete(
        &self,
        id: JobId,
        worker: &str,
        universe_id: UniverseId,
    ) -> Result<(), JobError> {
        let result = sqlx::query(
            r"UPDATE jobs
              SET status = $3, progress = 1.0, message = $4, universe_id = $5, updated_at = now()
              WHERE id = $1 AND status = $6 AND claimed_by = $2",
        )
        .bind(id.into_inner())
        .bind(worker)
        .bind(JobStatus::Done.as_str())
        .bind(DONE_MESSAGE)
        .bind(universe_id.into_inner())
        .bind(JobStatus::Running.as_str())
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(self.diagnose(id, worker, JobStatus::Done).await);
        }
        tracing::debug!(job_id = %id, %universe_id, "Job marked done");
        Ok(())
    }

    async fn fail(&self, id: JobId, worker: &str, message: &str) -> Result<(), JobError> {
        let result = sqlx::query(
            r"UPDATE jobs
              SET status = $3, message = $4, updated_at = now()
              WHERE id = $1 AND status = $5 AND claimed_by = $2",
        )
        .bind(id.into_inner())
        .bind(worker)
        .bind(JobStatus::Error.as_str())
        .bind(message)
        .bind(JobStatus::Running.as_str())
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(self.diagnose(id, worker, JobStatus::Error).await);
        }
        tracing::debug!(job_id = %id, "Job marked error");
        Ok(())
    }

    async fn jobs_for_owner(&self, owner: OwnerId) -> Result<Vec<JobRecord>, JobError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            r"SELECT {JOB_COLUMNS} FROM jobs
              WHERE owner_id = $1
              ORDER BY created_at DESC, id DESC"
        ))
        .bind(owner.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        let records = rows
            .into_iter()
            .map(JobRecord::try_from)
            .collect::<Result<Vec<_>, DbError>>()?;
        Ok(records)
    }
}

/// A row from the `jobs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobRow {
    /// Job UUID.
    pub id: Uuid,
    /// Wire name of the job kind.
    pub job_type: String,
    /// Requesting user.
    pub owner_id: i64,
    /// Wire name of the lifecycle state.
    pub status: String,
    /// Completion fraction.
    pub progress: f64,
    /// Latest status line.
    pub message: String,
    /// Worker holding the claim.
    pub claimed_by: Option<String>,
    /// Universe produced on success.
    pub universe_id: Option<Uuid>,
    /// Enqueue time.
    pub created_at: DateTime<Utc>,
    /// Last change.
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for JobRecord {
    type Error = DbError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: JobId::from(row.id),
            kind: row.job_type.parse()?,
            owner_id: OwnerId(row.owner_id),
            status: row.status.parse()?,
            progress: row.progress,
            message: row.message,
            claimed_by: row.claimed_by,
            universe_id: row.universe_id.map(UniverseId::from),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
