use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jobtrack_core::transport::UnreachableCause;
use serde_json::json;
use thiserror::Error;

use crate::jobs::store::StoreError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("LLM returned unusable output: {0}")]
    UpstreamFormat(String),

    #[error("LLM unreachable: {cause:?} ({detail})")]
    UpstreamUnreachable {
        cause: UnreachableCause,
        detail: String,
    },
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Unreachable { cause, detail } => {
                AppError::UpstreamUnreachable { cause, detail }
            }
            other => AppError::Llm(other.to_string()),
        }
    }
}

/// Oversized bodies keep axum's 413; every other rejection is a 400.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::Validation(rejection.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::UpstreamFormat(msg) => {
                tracing::error!("LLM output unusable: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_FORMAT_ERROR",
                    "AI did not return JSON".to_string(),
                )
            }
            AppError::UpstreamUnreachable { cause, detail } => {
                tracing::error!("LLM unreachable ({cause:?}): {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_UNREACHABLE",
                    cause.user_message().to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// `Json` extractor whose rejections surface as `AppError::Validation` (400)
/// instead of Axum's default plain-text 415/422 responses.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::PayloadTooLarge("x".into()).into_response().status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::UpstreamFormat("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::UpstreamUnreachable {
                cause: UnreachableCause::Network,
                detail: "refused".into(),
            }
            .into_response()
            .status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_unreachable_llm_error_keeps_cause() {
        let err: AppError = LlmError::Unreachable {
            cause: UnreachableCause::ContentBlocker,
            detail: "fetch failed".into(),
        }
        .into();
        assert!(matches!(
            err,
            AppError::UpstreamUnreachable {
                cause: UnreachableCause::ContentBlocker,
                ..
            }
        ));
    }

    #[test]
    fn test_other_llm_errors_are_generic() {
        let err: AppError = LlmError::Api {
            status: 401,
            message: "Invalid API Key".into(),
        }
        .into();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
