//! Request and response shapes for the AI helper endpoints.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::job::JobStatus;

/// Minimum trimmed length of an email accepted for extraction.
pub const MIN_EMAIL_CHARS: usize = 20;

pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Job details inferred from an email. Not persisted until the user saves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedJobInfo {
    pub company_name: String,
    pub role: String,
    pub status: JobStatus,
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractJobRequest {
    #[serde(default)]
    pub email_text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpEmailRequest {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub last_interview_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUpEmailResponse {
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionsRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestionsResponse {
    pub questions: Vec<String>,
}

static TALENT_ACQUISITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)talent acquisition").expect("valid regex"));
static RECRUITING_DEPARTMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)recruiting department").expect("valid regex"));

/// Removes the first "Talent Acquisition" and "Recruiting Department"
/// (any case) from a company name and trims the result.
pub fn strip_department_phrases(company: &str) -> String {
    let without_ta = TALENT_ACQUISITION.replace(company, "");
    RECRUITING_DEPARTMENT
        .replace(&without_ta, "")
        .trim()
        .to_string()
}

/// Trimmed value of an optional text field, `None` when absent or blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
