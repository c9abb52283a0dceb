//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use jobtrack_core::{Ack, CreateJob, JobRecord, UpdateJob};

use crate::errors::{AppError, AppJson};
use crate::state::AppState;

/// GET /jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobRecord>>, AppError> {
    Ok(Json(state.jobs.list().await?))
}

/// POST /jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateJob>,
) -> Result<(StatusCode, Json<JobRecord>), AppError> {
    let job = state.jobs.create(request).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<UpdateJob>,
) -> Result<Json<JobRecord>, AppError> {
    Ok(Json(state.jobs.update(&id, patch).await?))
}

/// DELETE /jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, AppError> {
    state.jobs.delete(&id).await?;
    Ok(Json(Ack { ok: true }))
}
