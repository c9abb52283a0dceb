//! Job Service
//!
//! Validation and business rules on top of a `JobStore`.

use std::sync::Arc;

use jobtrack_core::assistant::non_blank;
use jobtrack_core::{CreateJob, JobRecord, UpdateJob};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::store::{JobStore, NewJob};

#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn JobStore>,
}

impl JobService {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<JobRecord>, AppError> {
        Ok(self.store.list().await?)
    }

    pub async fn create(&self, req: CreateJob) -> Result<JobRecord, AppError> {
        let (Some(company_name), Some(role)) = (
            non_blank(req.company_name.as_deref()),
            non_blank(req.role.as_deref()),
        ) else {
            return Err(AppError::Validation(
                "companyName and role are required".to_string(),
            ));
        };

        let job = self
            .store
            .insert(NewJob {
                company_name: company_name.to_string(),
                role: role.to_string(),
                status: req.status.unwrap_or_default(),
                notes: req.notes.unwrap_or_default(),
            })
            .await?;

        info!("Job created: {} ({} at {})", job.id, job.role, job.company_name);
        Ok(job)
    }

    pub async fn update(&self, id: &str, patch: UpdateJob) -> Result<JobRecord, AppError> {
        let id = parse_id(id)?;
        let patch = UpdateJob {
            company_name: trimmed_required(patch.company_name, "companyName")?,
            role: trimmed_required(patch.role, "role")?,
            ..patch
        };

        let job = self
            .store
            .update(id, &patch)
            .await?
            .ok_or_else(job_not_found)?;

        info!("Job updated: {} (status {})", job.id, job.status);
        Ok(job)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        if !self.store.delete(id).await? {
            return Err(job_not_found());
        }

        info!("Job deleted: {id}");
        Ok(())
    }
}

/// An id that is not a UUID cannot name a stored record, so it is reported
/// the same way as an unknown one.
fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| job_not_found())
}

fn job_not_found() -> AppError {
    AppError::NotFound("Job not found".to_string())
}

/// A field that may be omitted from a patch but never blanked.
fn trimmed_required(value: Option<String>, field: &str) -> Result<Option<String>, AppError> {
    match value {
        None => Ok(None),
        Some(v) => match non_blank(Some(&v)) {
            Some(trimmed) => Ok(Some(trimmed.to_string())),
            None => Err(AppError::Validation(format!("{field} cannot be empty"))),
        },
    }
}
