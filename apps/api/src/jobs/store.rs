//! Job Store
//!
//! Persistence seam for job records. Production uses PostgreSQL; every
//! operation is a single statement, so atomicity is per record only.

use async_trait::async_trait;
use chrono::Utc;
use jobtrack_core::{JobRecord, JobStatus, UpdateJob};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::job::{JobRow, JOB_COLUMNS};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("row {id} is invalid: {reason}")]
    CorruptRow { id: Uuid, reason: String },
}

/// A validated record ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub company_name: String,
    pub role: String,
    pub status: JobStatus,
    pub notes: String,
}

#[async_trait]
pub trait JobStore: Send + Sync {
    /// All records, newest created first.
    async fn list(&self) -> Result<Vec<JobRecord>, StoreError>;

    /// Inserts a record, assigning its id and both timestamps.
    async fn insert(&self, job: NewJob) -> Result<JobRecord, StoreError>;

    /// Applies the present fields of `patch` and refreshes `updated_at`.
    /// Returns `None` when no record has this id.
    async fn update(&self, id: Uuid, patch: &UpdateJob) -> Result<Option<JobRecord>, StoreError>;

    /// Returns `false` when no record has this id.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn list(&self) -> Result<Vec<JobRecord>, StoreError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(JobRow::into_record).collect()
    }

    async fn insert(&self, job: NewJob) -> Result<JobRecord, StoreError> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, JobRow>(&format!(
            r#"
            INSERT INTO jobs (id, company_name, role, status, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&job.company_name)
        .bind(&job.role)
        .bind(job.status.as_str())
        .bind(&job.notes)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row.into_record()
    }

    async fn update(&self, id: Uuid, patch: &UpdateJob) -> Result<Option<JobRecord>, StoreError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            r#"
            UPDATE jobs SET
                company_name = COALESCE($2, company_name),
                role = COALESCE($3, role),
                status = COALESCE($4, status),
                notes = COALESCE($5, notes),
                updated_at = $6
            WHERE id = $1
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.company_name.as_deref())
        .bind(patch.role.as_deref())
        .bind(patch.status.map(|s| s.as_str()))
        .bind(patch.notes.as_deref())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        row.map(JobRow::into_record).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
