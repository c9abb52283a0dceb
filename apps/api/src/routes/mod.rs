pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

/// Largest accepted request body (pasted emails included).
const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route(
            "/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/jobs/:id",
            put(jobs::handle_update_job).delete(jobs::handle_delete_job),
        )
        // AI helper
        .route("/extract-job", post(assistant::handle_extract_job))
        .route(
            "/generate-followup-email",
            post(assistant::handle_generate_follow_up_email),
        )
        .route(
            "/generate-interview-questions",
            post(assistant::handle_generate_interview_questions),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
