use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisResult {
    #[serde(rename = "JD_match")]
    pub jd_match: f64,
    pub analysis: String,
}

/// Uniform envelope returned by the analysis endpoints.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub gemini_configured: bool,
}

impl HealthResponse {
    /// Synthetic value used when the health endpoint cannot be reached.
    pub fn offline() -> Self {
        HealthResponse {
            status: "error".to_string(),
            gemini_configured: false,
        }
    }

    // The backend reports `status: "running"` when healthy; anything else
    // counts as down.
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Checking,
    Online,
    Offline,
}
