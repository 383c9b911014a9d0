use crate::error::AppError;
use crate::models::analysis_types::{ApiResponse, HealthResponse};
use log::warn;
use std::time::Duration;

/// Base URL of the analysis backend (Flask dev server default).
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Thin client for the three backend endpoints. Network-origin failures are
/// normalized into the response types here and never surface as `Err` to
/// callers.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(ApiClient {
            http,
            base_url: base_url.into(),
        })
    }

    /// POST multipart form (`resume` file, `job_description` text) to `/analyze`.
    pub async fn analyze_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        job_description: &str,
    ) -> ApiResponse {
        let part = match reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
        {
            Ok(part) => part,
            Err(e) => return ApiResponse::failure(format!("Failed to build upload: {}", e)),
        };
        let form = reqwest::multipart::Form::new()
            .part("resume", part)
            .text("job_description", job_description.to_string());

        let request = self
            .http
            .post(format!("{}/analyze", self.base_url))
            .multipart(form);
        self.dispatch(request).await
    }

    /// POST JSON (`resume_text`, `job_description_text`) to `/analyze-text`.
    pub async fn analyze_text(&self, resume_text: &str, job_description: &str) -> ApiResponse {
        let body = serde_json::json!({
            "resume_text": resume_text,
            "job_description_text": job_description,
        });
        let request = self
            .http
            .post(format!("{}/analyze-text", self.base_url))
            .json(&body);
        self.dispatch(request).await
    }

    /// GET `/health`. Any failure yields the synthetic offline value instead
    /// of an error.
    pub async fn check_health(&self) -> HealthResponse {
        let response = match self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Health check failed: {}", e);
                return HealthResponse::offline();
            }
        };

        if !response.status().is_success() {
            warn!("Health check returned HTTP {}", response.status());
            return HealthResponse::offline();
        }

        match response.json::<HealthResponse>().await {
            Ok(health) => health,
            Err(e) => {
                warn!("Health check returned malformed body: {}", e);
                HealthResponse::offline()
            }
        }
    }

    async fn dispatch(&self, request: reqwest::RequestBuilder) -> ApiResponse {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Analysis request failed: {}", e);
                return ApiResponse::failure(e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Analysis request returned HTTP {}", status);
            return ApiResponse::failure(format!("HTTP error! status: {}", status.as_u16()));
        }

        match response.json::<ApiResponse>().await {
            Ok(body) => body,
            Err(e) => ApiResponse::failure(format!("Malformed response: {}", e)),
        }
    }
}
