use crate::models::analysis_types::{AnalysisResult, ApiStatus};
use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Analyzing,
    Result,
}

#[derive(Debug, Serialize, Clone)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
}

/// Everything the webview needs to render the current view.
#[derive(Debug, Serialize, Clone)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub file: Option<FileInfo>,
    pub job_description: String,
    pub result: Option<AnalysisResult>,
    pub api_status: ApiStatus,
    pub can_submit: bool,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

/// Payload for the transient toast area in the frontend.
#[derive(Debug, Serialize, Clone)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Info,
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Warning,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}
