use crate::jobs::service::JobService;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing here is a global.
#[derive(Clone)]
pub struct AppState {
    pub jobs: JobService,
    pub llm: LlmClient,
}
