//! Job extraction: turns a raw email into `ExtractedJobInfo` via the LLM.

use jobtrack_core::assistant::{strip_department_phrases, MIN_EMAIL_CHARS, UNKNOWN_COMPANY};
use jobtrack_core::{ExtractedJobInfo, JobStatus};
use serde_json::{Map, Value};

use crate::assistant::prompts::{EXTRACT_JOB_PROMPT_TEMPLATE, EXTRACT_TEMPERATURE};
use crate::errors::AppError;
use crate::llm_client::prompts::{render, JSON_ONLY_SYSTEM};
use crate::llm_client::{parse_json_recovering, LlmClient};

const UNKNOWN_ROLE: &str = "Unknown";

pub async fn extract_job(
    llm: &LlmClient,
    email_text: Option<&str>,
) -> Result<ExtractedJobInfo, AppError> {
    let email_text = email_text
        .filter(|text| text.trim().chars().count() >= MIN_EMAIL_CHARS)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "emailText is required and must be at least {MIN_EMAIL_CHARS} characters"
            ))
        })?;

    let prompt = render(EXTRACT_JOB_PROMPT_TEMPLATE, &[("email_text", email_text)]);
    let raw = llm
        .complete(&prompt, JSON_ONLY_SYSTEM, EXTRACT_TEMPERATURE)
        .await?;

    let parsed: Map<String, Value> = parse_json_recovering(&raw, '{', '}')
        .map_err(|e| AppError::UpstreamFormat(format!("{e}; raw output: {raw}")))?;

    Ok(normalize_extraction(&parsed))
}

/// Coerces whatever the model produced into the four expected fields.
///
/// - `status` must be one of the canonical names verbatim, else `Applied`
/// - `companyName` loses recruiting-department phrases; empty becomes
///   "Unknown Company"
/// - `role` defaults to "Unknown"
pub fn normalize_extraction(parsed: &Map<String, Value>) -> ExtractedJobInfo {
    let company_name = text_field(parsed, "companyName")
        .map(|company| strip_department_phrases(&company))
        .filter(|company| !company.is_empty())
        .unwrap_or_else(|| UNKNOWN_COMPANY.to_string());

    let role = text_field(parsed, "role").unwrap_or_else(|| UNKNOWN_ROLE.to_string());

    let status = parsed
        .get("status")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<JobStatus>().ok())
        .unwrap_or_default();

    let notes = text_field(parsed, "notes").unwrap_or_default();

    ExtractedJobInfo {
        company_name,
        role,
        status,
        notes,
    }
}

/// Trimmed text of a scalar field. Strings are used as-is, numbers and
/// booleans are stringified, everything else counts as absent.
fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match map.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{chat_completion_body, client_for};
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_normalize_strips_department_phrases() {
        let info = normalize_extraction(&as_map(json!({
            "companyName": "Acme Talent Acquisition",
            "role": "Backend Engineer",
            "status": "Interview",
            "notes": "  Phone screen next week. "
        })));
        assert_eq!(info.company_name, "Acme");
        assert_eq!(info.role, "Backend Engineer");
        assert_eq!(info.status, JobStatus::Interview);
        assert_eq!(info.notes, "Phone screen next week.");
    }

    #[test]
    fn test_normalize_forces_unknown_status_to_applied() {
        let info = normalize_extraction(&as_map(json!({
            "companyName": "Acme",
            "role": "Engineer",
            "status": "offer"
        })));
        assert_eq!(info.status, JobStatus::Applied);
    }

    #[test]
    fn test_normalize_defaults_empty_fields() {
        let info = normalize_extraction(&as_map(json!({
            "companyName": "Recruiting Department",
            "role": "  ",
            "status": null
        })));
        assert_eq!(info.company_name, "Unknown Company");
        assert_eq!(info.role, "Unknown");
        assert_eq!(info.status, JobStatus::Applied);
        assert_eq!(info.notes, "");
    }

    #[test]
    fn test_normalize_stringifies_scalars() {
        let info = normalize_extraction(&as_map(json!({
            "companyName": 3,
            "role": ["not", "a", "role"]
        })));
        assert_eq!(info.company_name, "3");
        assert_eq!(info.role, "Unknown");
    }

    #[tokio::test]
    async fn test_short_email_is_rejected_before_calling_llm() {
        let llm = LlmClient::new("k".into(), "http://127.0.0.1:1").unwrap();
        let err = extract_job(&llm, Some("   short    ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = extract_job(&llm, None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_extract_recovers_json_wrapped_in_prose() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(chat_completion_body(
                r#"Here is the result: {"companyName":"Acme","role":"Engineer","status":"Rejected","notes":"Not moving forward."} thanks"#,
            ))
            .create_async()
            .await;

        let info = extract_job(
            &client_for(&server),
            Some("Unfortunately we will not be moving forward with your application."),
        )
        .await
        .unwrap();

        assert_eq!(info.company_name, "Acme");
        assert_eq!(info.status, JobStatus::Rejected);
    }

    #[tokio::test]
    async fn test_extract_without_json_is_format_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(chat_completion_body("Sorry, I cannot help with that."))
            .create_async()
            .await;

        let err = extract_job(
            &client_for(&server),
            Some("Thank you for applying to Acme for the Engineer role."),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::UpstreamFormat(_)));
    }
}
