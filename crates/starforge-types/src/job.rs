//! Job Record and the client-facing status payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{JobKind, JobStatus};
use crate::ids::{JobId, OwnerId, UniverseId};

/// Durable unit-of-work descriptor with lifecycle state and progress.
///
/// `id`, `owner_id`, `kind`, and `created_at` never change after creation.
/// `progress` is a fraction in `[0.0, 1.0]` and never decreases while the
/// record is `running`. `message` is overwritten on every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct JobRecord {
    /// Unique job id.
    pub id: JobId,
    /// What the job does.
    pub kind: JobKind,
    /// The user who requested the work.
    pub owner_id: OwnerId,
    /// Current lifecycle state.
    pub status: JobStatus,
    /// Completion fraction in `[0.0, 1.0]`.
    pub progress: f64,
    /// Latest human-readable status line.
    pub message: String,
    /// Identity of the worker holding the claim, once claimed.
    pub claimed_by: Option<String>,
    /// The universe produced by the job, once generation created one.
    pub universe_id: Option<UniverseId>,
    /// When the job was enqueued.
    pub created_at: DateTime<Utc>,
    /// When the record last changed.
    pub updated_at: DateTime<Utc>,
}

/// Read-only projection of a [`JobRecord`] returned to polling clients.
///
/// A failed job differs from a successful one only through `status` and
/// `message`; there is no structured error code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct JobStatusReport {
    /// The job being reported on.
    pub id: JobId,
    /// Current lifecycle state.
    pub status: JobStatus,
    /// Completion fraction in `[0.0, 1.0]`.
    pub progress: f64,
    /// Latest status line, verbatim.
    pub message: String,
    /// The generated universe, when one exists.
    pub universe_id: Option<UniverseId>,
}

impl From<&JobRecord> for JobStatusReport {
    fn from(record: &JobRecord) -> Self {
        Self {
            id: record.id,
            status: record.status,
            progress: record.progress,
            message: record.message.clone(),
            universe_id: record.universe_id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn report_projects_record_fields() {
        let now = Utc::now();
        let record = JobRecord {
            id: JobId::new(),
            kind: JobKind::UniverseGeneration,
            owner_id: OwnerId(42),
            status: JobStatus::Running,
            progress: 0.3,
            message: String::from("galaxies: 5/5"),
            claimed_by: Some(String::from("worker-a")),
            universe_id: None,
            created_at: now,
            updated_at: now,
        };

        let report = JobStatusReport::from(&record);
        assert_eq!(report.id, record.id);
        assert_eq!(report.status, JobStatus::Running);
        assert!((report.progress - 0.3).abs() < f64::EPSILON);
        assert_eq!(report.message, "galaxies: 5/5");
        assert!(report.universe_id.is_none());
    }

    #[test]
    fn report_serializes_status_as_wire_name() {
        let report = JobStatusReport {
            id: JobId::new(),
            status: JobStatus::Error,
            progress: 0.55,
            message: String::from("boom"),
            universe_id: None,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "boom");
    }
}
