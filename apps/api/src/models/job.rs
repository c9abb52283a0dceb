use std::str::FromStr;

use chrono::{DateTime, Utc};
use jobtrack_core::{JobRecord, JobStatus};
use sqlx::FromRow;
use uuid::Uuid;

use crate::jobs::store::StoreError;

/// Column list shared by every query that returns a full job row.
pub const JOB_COLUMNS: &str = "id, company_name, role, status, notes, created_at, updated_at";

#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub company_name: String,
    pub role: String,
    pub status: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobRow {
    pub fn into_record(self) -> Result<JobRecord, StoreError> {
        let status = JobStatus::from_str(&self.status).map_err(|e| StoreError::CorruptRow {
            id: self.id,
            reason: e.to_string(),
        })?;

        Ok(JobRecord {
            id: self.id,
            company_name: self.company_name,
            role: self.role,
            status,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> JobRow {
        let now = Utc::now();
        JobRow {
            id: Uuid::new_v4(),
            company_name: "Acme".into(),
            role: "Engineer".into(),
            status: status.into(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_row_with_known_status_converts() {
        let record = row("Interview").into_record().unwrap();
        assert_eq!(record.status, JobStatus::Interview);
    }

    #[test]
    fn test_row_with_unknown_status_is_corrupt() {
        let err = row("Ghosted").into_record().unwrap_err();
        assert!(matches!(err, StoreError::CorruptRow { .. }));
    }
}
