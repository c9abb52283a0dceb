//! Free-form generation: follow-up emails and interview questions.

use jobtrack_core::assistant::non_blank;
use serde_json::Value;
use tracing::warn;

use crate::assistant::prompts::{
    FOLLOW_UP_PROMPT_TEMPLATE, FOLLOW_UP_TEMPERATURE, INTERVIEW_QUESTIONS_PROMPT_TEMPLATE,
    QUESTIONS_TEMPERATURE,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{render, JSON_ONLY_SYSTEM, PLAIN_TEXT_SYSTEM};
use crate::llm_client::{parse_json_recovering, LlmClient};

/// Returns the model's email text untouched.
pub async fn generate_follow_up_email(
    llm: &LlmClient,
    company_name: Option<&str>,
    role: Option<&str>,
    last_interview_date: Option<&str>,
) -> Result<String, AppError> {
    let (Some(company_name), Some(role), Some(last_interview_date)) = (
        non_blank(company_name),
        non_blank(role),
        non_blank(last_interview_date),
    ) else {
        return Err(AppError::Validation(
            "companyName, role and lastInterviewDate are required".to_string(),
        ));
    };

    let prompt = render(
        FOLLOW_UP_PROMPT_TEMPLATE,
        &[
            ("company_name", company_name),
            ("role", role),
            ("last_interview_date", last_interview_date),
        ],
    );

    Ok(llm
        .complete(&prompt, PLAIN_TEXT_SYSTEM, FOLLOW_UP_TEMPERATURE)
        .await?)
}

/// Asks for 7 questions; an unparseable answer yields an empty list.
pub async fn generate_interview_questions(
    llm: &LlmClient,
    role: Option<&str>,
    tech_stack: Option<&str>,
) -> Result<Vec<String>, AppError> {
    let (Some(role), Some(tech_stack)) = (non_blank(role), non_blank(tech_stack)) else {
        return Err(AppError::Validation(
            "role and techStack are required".to_string(),
        ));
    };

    let prompt = render(
        INTERVIEW_QUESTIONS_PROMPT_TEMPLATE,
        &[("role", role), ("tech_stack", tech_stack)],
    );
    let raw = llm
        .complete(&prompt, JSON_ONLY_SYSTEM, QUESTIONS_TEMPERATURE)
        .await?;

    Ok(parse_questions(&raw))
}

fn parse_questions(raw: &str) -> Vec<String> {
    match parse_json_recovering::<Vec<Value>>(raw, '[', ']') {
        Ok(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(String::from)
            .collect(),
        Err(e) => {
            warn!("Interview questions were not a JSON array ({e}); returning none");
            Vec::new()
        }
    }
}
