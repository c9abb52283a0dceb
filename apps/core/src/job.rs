//! Job record domain types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown job status '{0}' (expected Applied, Interview, Offer or Rejected)")]
pub struct UnknownStatus(pub String);

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the four canonical names.
impl FromStr for JobStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A persisted job application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: Uuid,
    pub company_name: String,
    pub role: String,
    pub status: JobStatus,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /jobs`.
///
/// Company and role are optional at the type level so that a missing field is
/// reported as a validation failure rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `PUT /jobs/:id`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UpdateJob {
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.role.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }
}

/// `{ "ok": true }` acknowledgement returned by delete and health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str_is_exact() {
        assert_eq!("Offer".parse::<JobStatus>(), Ok(JobStatus::Offer));
        assert!("offer".parse::<JobStatus>().is_err());
        assert!("Ghosted".parse::<JobStatus>().is_err());
    }

    #[test]
    fn test_status_default_is_applied() {
        assert_eq!(JobStatus::default(), JobStatus::Applied);
    }

    #[test]
    fn test_unknown_status_is_rejected_by_serde() {
        let result = serde_json::from_str::<CreateJob>(r#"{"status": "Pending"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_job_record_uses_camel_case() {
        let json = r#"{
            "id": "6f1c2a1e-7d3b-4a55-9a0c-3f2b1c0d9e8f",
            "companyName": "Acme",
            "role": "Engineer",
            "status": "Interview",
            "notes": "",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-02T10:00:00Z"
        }"#;
        let record: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.company_name, "Acme");
        assert_eq!(record.status, JobStatus::Interview);

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("companyName").is_some());
        assert!(value.get("company_name").is_none());
    }

    #[test]
    fn test_update_job_ignores_immutable_fields() {
        let json = r#"{"id": "abc", "createdAt": "x", "notes": "follow up"}"#;
        let patch: UpdateJob = serde_json::from_str(json).unwrap();
        assert_eq!(patch.notes.as_deref(), Some("follow up"));
        assert!(patch.company_name.is_none());
        assert!(!patch.is_empty());
        assert!(UpdateJob::default().is_empty());
    }
}
