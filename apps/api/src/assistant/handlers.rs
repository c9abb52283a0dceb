//! Axum route handlers for the AI helper.

use axum::{extract::State, Json};
use jobtrack_core::assistant::{
    ExtractJobRequest, FollowUpEmailRequest, FollowUpEmailResponse, InterviewQuestionsRequest,
    InterviewQuestionsResponse,
};
use jobtrack_core::ExtractedJobInfo;

use crate::assistant::extract::extract_job;
use crate::assistant::generate::{generate_follow_up_email, generate_interview_questions};
use crate::errors::{AppError, AppJson};
use crate::state::AppState;

/// POST /extract-job
///
/// Infers company, role and status from a pasted email. Nothing is saved.
pub async fn handle_extract_job(
    State(state): State<AppState>,
    AppJson(request): AppJson<ExtractJobRequest>,
) -> Result<Json<ExtractedJobInfo>, AppError> {
    let info = extract_job(&state.llm, request.email_text.as_deref()).await?;
    Ok(Json(info))
}

/// POST /generate-followup-email
pub async fn handle_generate_follow_up_email(
    State(state): State<AppState>,
    AppJson(request): AppJson<FollowUpEmailRequest>,
) -> Result<Json<FollowUpEmailResponse>, AppError> {
    let email = generate_follow_up_email(
        &state.llm,
        request.company_name.as_deref(),
        request.role.as_deref(),
        request.last_interview_date.as_deref(),
    )
    .await?;

    Ok(Json(FollowUpEmailResponse { email }))
}

/// POST /generate-interview-questions
pub async fn handle_generate_interview_questions(
    State(state): State<AppState>,
    AppJson(request): AppJson<InterviewQuestionsRequest>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    let questions = generate_interview_questions(
        &state.llm,
        request.role.as_deref(),
        request.tech_stack.as_deref(),
    )
    .await?;

    Ok(Json(InterviewQuestionsResponse { questions }))
}
