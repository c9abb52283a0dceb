//! In-memory `JobStore` used by the service and router tests.

use async_trait::async_trait;
use chrono::Utc;
use jobtrack_core::{JobRecord, UpdateJob};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::jobs::store::{JobStore, NewJob, StoreError};

#[derive(Default)]
pub struct MemoryJobStore {
    jobs: RwLock<Vec<JobRecord>>,
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn list(&self) -> Result<Vec<JobRecord>, StoreError> {
        let mut jobs: Vec<JobRecord> = self.jobs.read().await.iter().rev().cloned().collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn insert(&self, job: NewJob) -> Result<JobRecord, StoreError> {
        let now = Utc::now();
        let record = JobRecord {
            id: Uuid::new_v4(),
            company_name: job.company_name,
            role: job.role,
            status: job.status,
            notes: job.notes,
            created_at: now,
            updated_at: now,
        };
        self.jobs.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, patch: &UpdateJob) -> Result<Option<JobRecord>, StoreError> {
        let mut jobs = self.jobs.write().await;
        let Some(job) = jobs.iter_mut().find(|job| job.id == id) else {
            return Ok(None);
        };

        if let Some(company_name) = &patch.company_name {
            job.company_name = company_name.clone();
        }
        if let Some(role) = &patch.role {
            job.role = role.clone();
        }
        if let Some(status) = patch.status {
            job.status = status;
        }
        if let Some(notes) = &patch.notes {
            job.notes = notes.clone();
        }
        job.updated_at = Utc::now();

        Ok(Some(job.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut jobs = self.jobs.write().await;
        let before = jobs.len();
        jobs.retain(|job| job.id != id);
        Ok(jobs.len() < before)
    }
}
