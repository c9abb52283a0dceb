//! API client module
//!
//! HTTP client for the jobtrack API.

use jobtrack_core::assistant::{
    ExtractJobRequest, FollowUpEmailRequest, FollowUpEmailResponse, InterviewQuestionsRequest,
    InterviewQuestionsResponse,
};
use jobtrack_core::transport::{classify_transport_failure, error_chain, UnreachableCause};
use jobtrack_core::{Ack, CreateJob, ExtractedJobInfo, JobRecord, UpdateJob};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never reached the API.
    #[error("Could not reach the jobtrack API: {detail}")]
    Unreachable {
        cause: UnreachableCause,
        detail: String,
    },

    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("Failed to parse response JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for the jobtrack API
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// All jobs, newest first
    pub async fn list_jobs(&self) -> Result<Vec<JobRecord>, ClientError> {
        self.send(self.client.get(self.url("/jobs"))).await
    }

    pub async fn create_job(&self, req: &CreateJob) -> Result<JobRecord, ClientError> {
        self.send(self.client.post(self.url("/jobs")).json(req))
            .await
    }

    /// Applies a partial update
    pub async fn update_job(&self, id: Uuid, patch: &UpdateJob) -> Result<JobRecord, ClientError> {
        self.send(self.client.put(self.url(&format!("/jobs/{id}"))).json(patch))
            .await
    }

    pub async fn delete_job(&self, id: Uuid) -> Result<Ack, ClientError> {
        self.send(self.client.delete(self.url(&format!("/jobs/{id}"))))
            .await
    }

    /// Asks the AI helper to read an email
    pub async fn extract_job(&self, email_text: &str) -> Result<ExtractedJobInfo, ClientError> {
        let req = ExtractJobRequest {
            email_text: Some(email_text.to_string()),
        };
        self.send(self.client.post(self.url("/extract-job")).json(&req))
            .await
    }

    pub async fn generate_follow_up_email(
        &self,
        req: &FollowUpEmailRequest,
    ) -> Result<FollowUpEmailResponse, ClientError> {
        self.send(self.client.post(self.url("/generate-followup-email")).json(req))
            .await
    }

    pub async fn generate_interview_questions(
        &self,
        req: &InterviewQuestionsRequest,
    ) -> Result<InterviewQuestionsResponse, ClientError> {
        self.send(
            self.client
                .post(self.url("/generate-interview-questions"))
                .json(req),
        )
        .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and deserializes a JSON success body.
    /// Error bodies of the form `{"error": {"message": ...}}` are unwrapped.
    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| {
            let detail = error_chain(&e);
            ClientError::Unreachable {
                cause: classify_transport_failure(&detail),
                detail,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(ClientError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrack_core::JobStatus;

    #[tokio::test]
    async fn test_list_jobs_decodes_records() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/jobs")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id":"6f1c2a1e-7d3b-4a55-9a0c-3f2b1c0d9e8f","companyName":"Acme","role":"Engineer",
                "status":"Offer","notes":"","createdAt":"2024-05-01T10:00:00Z","updatedAt":"2024-05-01T10:00:00Z"}]"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(&format!("{}/", server.url()));
        let jobs = client.list_jobs().await.unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].status, JobStatus::Offer);
    }

    #[tokio::test]
    async fn test_error_envelope_message_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/jobs")
            .with_status(400)
            .with_body(r#"{"error":{"code":"VALIDATION_ERROR","message":"companyName and role are required"}}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url());
        let err = client.create_job(&CreateJob::default()).await.unwrap_err();

        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "companyName and role are required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_api() {
        let client = ApiClient::new("http://127.0.0.1:1");
        let err = client.list_jobs().await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Unreachable {
                cause: UnreachableCause::Network,
                ..
            }
        ));
    }
}
