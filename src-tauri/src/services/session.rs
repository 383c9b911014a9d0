use crate::models::analysis_types::{AnalysisResult, ApiResponse, ApiStatus, HealthResponse};
use crate::models::session_types::{FileInfo, Notification, Phase, SessionSnapshot};
use log::{debug, info};
use tokio::sync::Mutex;

/// The one resume held for the current session. Lives only in memory and is
/// dropped on removal, replacement or reset.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
struct SessionState {
    phase: Phase,
    file: Option<SelectedFile>,
    job_description: String,
    result: Option<AnalysisResult>,
    api_status: ApiStatus,
}

/// Owns all page state: the attached file, the job description, the current
/// phase and the last result. Commands are the only mutators; everything is
/// serialized through one lock.
pub struct Session {
    state: Mutex<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: Mutex::new(SessionState {
                phase: Phase::Idle,
                file: None,
                job_description: String::new(),
                result: None,
                api_status: ApiStatus::Checking,
            }),
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;
        Self::snapshot_of(&state)
    }

    /// Accepts the file only if the content sniffs as PDF; anything else is
    /// ignored without surfacing an error. Returns whether the file was taken.
    pub async fn attach_file(&self, name: String, bytes: Vec<u8>) -> bool {
        if !is_pdf(&bytes) {
            debug!("Ignored non-PDF file: {}", name);
            return false;
        }
        let mut state = self.state.lock().await;
        info!("Attached resume '{}' ({} bytes)", name, bytes.len());
        state.file = Some(SelectedFile { name, bytes });
        true
    }

    pub async fn selected_file(&self) -> Option<SelectedFile> {
        self.state.lock().await.file.clone()
    }

    pub async fn remove_file(&self) {
        self.state.lock().await.file = None;
    }

    pub async fn set_job_description(&self, text: String) {
        self.state.lock().await.job_description = text;
    }

    pub async fn api_status(&self) -> ApiStatus {
        self.state.lock().await.api_status
    }

    /// Folds a health probe result into the session.
    pub async fn apply_health(&self, health: &HealthResponse) -> ApiStatus {
        let status = if health.is_running() {
            ApiStatus::Online
        } else {
            ApiStatus::Offline
        };
        self.state.lock().await.api_status = status;
        status
    }

    /// `Idle -> Analyzing` for the file flow. Rejections come back as the
    /// toast to show; the phase does not advance.
    pub async fn begin_analysis(&self) -> Result<(SelectedFile, String), Notification> {
        let mut state = self.state.lock().await;
        Self::check_ready(&state)?;
        let file = match &state.file {
            Some(file) => file.clone(),
            None => {
                return Err(Notification::warning(
                    "Incomplete Form",
                    "Attach a resume PDF and enter a job description first.",
                ))
            }
        };
        if state.job_description.trim().is_empty() {
            return Err(Notification::warning(
                "Incomplete Form",
                "Attach a resume PDF and enter a job description first.",
            ));
        }
        state.phase = Phase::Analyzing;
        state.result = None;
        Ok((file, state.job_description.clone()))
    }

    /// `Idle -> Analyzing` for the pasted-text flow; reuses the session's job
    /// description.
    pub async fn begin_text_analysis(&self, resume_text: &str) -> Result<String, Notification> {
        let mut state = self.state.lock().await;
        Self::check_ready(&state)?;
        if resume_text.trim().is_empty() || state.job_description.trim().is_empty() {
            return Err(Notification::warning(
                "Incomplete Form",
                "Paste your resume text and enter a job description first.",
            ));
        }
        state.phase = Phase::Analyzing;
        state.result = None;
        Ok(state.job_description.clone())
    }

    /// `Analyzing -> Result` on a success payload, `Analyzing -> Idle`
    /// otherwise. Always produces exactly one notification.
    pub async fn finish_analysis(&self, response: ApiResponse) -> (SessionSnapshot, Notification) {
        let mut state = self.state.lock().await;
        let ApiResponse {
            success,
            result,
            error,
        } = response;

        let notification = match (success, result) {
            (true, Some(result)) => {
                let notification = Notification::info(
                    "Analysis Complete!",
                    format!(
                        "Resume analyzed with {}% match score.",
                        result.jd_match.round()
                    ),
                );
                state.phase = Phase::Result;
                state.result = Some(result);
                notification
            }
            _ => {
                state.phase = Phase::Idle;
                state.result = None;
                let message = error.unwrap_or_else(|| "Analysis failed".to_string());
                Notification::error("Analysis Failed", message)
            }
        };

        (Self::snapshot_of(&state), notification)
    }

    /// `Result -> Idle`: clears file, text and result in one step. The API
    /// status survives, it is not re-probed.
    pub async fn reset(&self) -> SessionSnapshot {
        let mut state = self.state.lock().await;
        state.phase = Phase::Idle;
        state.file = None;
        state.job_description.clear();
        state.result = None;
        Self::snapshot_of(&state)
    }

    fn check_ready(state: &SessionState) -> Result<(), Notification> {
        if state.phase == Phase::Analyzing {
            return Err(Notification::warning(
                "Analysis In Progress",
                "Please wait for the current analysis to finish.",
            ));
        }
        if state.api_status != ApiStatus::Online {
            return Err(Notification::error(
                "API Unavailable",
                "Backend API is not running. Please start your Flask server.",
            ));
        }
        Ok(())
    }

    fn snapshot_of(state: &SessionState) -> SessionSnapshot {
        SessionSnapshot {
            phase: state.phase,
            file: state.file.as_ref().map(|file| FileInfo {
                name: file.name.clone(),
                size: file.bytes.len() as u64,
            }),
            job_description: state.job_description.clone(),
            result: state.result.clone(),
            api_status: state.api_status,
            can_submit: state.file.is_some()
                && !state.job_description.trim().is_empty()
                && state.api_status == ApiStatus::Online
                && state.phase != Phase::Analyzing,
        }
    }
}

fn is_pdf(bytes: &[u8]) -> bool {
    infer::get(bytes)
        .map(|kind| kind.mime_type() == "application/pdf")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis_types::AnalysisResult;
    use crate::models::session_types::NotificationKind;

    const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\ntrailer\n%%EOF";
    const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

    async fn online_session() -> Session {
        let session = Session::new();
        session
            .apply_health(&HealthResponse {
                status: "running".to_string(),
                gemini_configured: true,
            })
            .await;
        session
    }

    fn sample_result(score: f64) -> ApiResponse {
        ApiResponse {
            success: true,
            result: Some(AnalysisResult {
                jd_match: score,
                analysis: "Looks good.".to_string(),
            }),
            error: None,
        }
    }

    #[tokio::test]
    async fn pdf_file_is_attached() {
        let session = Session::new();
        assert!(
            session
                .attach_file("resume.pdf".to_string(), PDF_BYTES.to_vec())
                .await
        );
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.file.unwrap().name, "resume.pdf");
    }

    #[tokio::test]
    async fn non_pdf_file_is_silently_ignored() {
        let session = Session::new();
        assert!(
            !session
                .attach_file("photo.png".to_string(), PNG_BYTES.to_vec())
                .await
        );
        assert!(session.snapshot().await.file.is_none());
    }

    #[tokio::test]
    async fn non_pdf_drop_leaves_existing_selection_unchanged() {
        let session = Session::new();
        session
            .attach_file("resume.pdf".to_string(), PDF_BYTES.to_vec())
            .await;
        session
            .attach_file("photo.png".to_string(), PNG_BYTES.to_vec())
            .await;
        assert_eq!(session.snapshot().await.file.unwrap().name, "resume.pdf");
    }

    #[tokio::test]
    async fn replacing_a_file_overwrites_the_previous_selection() {
        let session = Session::new();
        session
            .attach_file("old.pdf".to_string(), PDF_BYTES.to_vec())
            .await;
        session
            .attach_file("new.pdf".to_string(), PDF_BYTES.to_vec())
            .await;
        assert_eq!(session.snapshot().await.file.unwrap().name, "new.pdf");
    }

    #[tokio::test]
    async fn can_submit_requires_file_text_and_online_status() {
        let session = Session::new();
        assert!(!session.snapshot().await.can_submit);

        session
            .attach_file("resume.pdf".to_string(), PDF_BYTES.to_vec())
            .await;
        assert!(!session.snapshot().await.can_submit);

        session
            .set_job_description("Senior Rust engineer".to_string())
            .await;
        // Still checking, not online.
        assert!(!session.snapshot().await.can_submit);

        session
            .apply_health(&HealthResponse {
                status: "running".to_string(),
                gemini_configured: true,
            })
            .await;
        assert!(session.snapshot().await.can_submit);
    }

    #[tokio::test]
    async fn whitespace_job_description_does_not_enable_submission() {
        let session = online_session().await;
        session
            .attach_file("resume.pdf".to_string(), PDF_BYTES.to_vec())
            .await;
        session.set_job_description("   \n\t ".to_string()).await;
        assert!(!session.snapshot().await.can_submit);
    }

    #[tokio::test]
    async fn non_running_health_status_disables_submission() {
        let session = Session::new();
        session
            .attach_file("resume.pdf".to_string(), PDF_BYTES.to_vec())
            .await;
        session
            .set_job_description("Senior Rust engineer".to_string())
            .await;
        let status = session
            .apply_health(&HealthResponse {
                status: "degraded".to_string(),
                gemini_configured: true,
            })
            .await;

        assert_eq!(status, ApiStatus::Offline);
        assert!(!session.snapshot().await.can_submit);

        let rejection = session.begin_analysis().await.unwrap_err();
        assert_eq!(rejection.kind, NotificationKind::Error);
        assert_eq!(session.snapshot().await.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn successful_analysis_advances_to_result() {
        let session = online_session().await;
        session
            .attach_file("resume.pdf".to_string(), PDF_BYTES.to_vec())
            .await;
        session
            .set_job_description("Senior Rust engineer".to_string())
            .await;

        let (file, job) = session.begin_analysis().await.unwrap();
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(job, "Senior Rust engineer");
        assert_eq!(session.snapshot().await.phase, Phase::Analyzing);

        let (snapshot, notification) = session.finish_analysis(sample_result(82.0)).await;
        assert_eq!(snapshot.phase, Phase::Result);
        assert_eq!(snapshot.result.unwrap().jd_match, 82.0);
        assert_eq!(notification.kind, NotificationKind::Info);
        assert_eq!(
            notification.message,
            "Resume analyzed with 82% match score."
        );
    }

    #[tokio::test]
    async fn failed_analysis_returns_to_idle_with_one_error_notification() {
        let session = online_session().await;
        session
            .attach_file("resume.pdf".to_string(), PDF_BYTES.to_vec())
            .await;
        session
            .set_job_description("Senior Rust engineer".to_string())
            .await;

        session.begin_analysis().await.unwrap();
        let (snapshot, notification) = session
            .finish_analysis(ApiResponse::failure("connection reset"))
            .await;

        assert_eq!(snapshot.phase, Phase::Idle);
        assert!(snapshot.result.is_none());
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, "connection reset");
    }

    #[tokio::test]
    async fn success_without_payload_counts_as_failure() {
        let session = online_session().await;
        session
            .attach_file("resume.pdf".to_string(), PDF_BYTES.to_vec())
            .await;
        session.set_job_description("Engineer".to_string()).await;
        session.begin_analysis().await.unwrap();

        let (snapshot, notification) = session
            .finish_analysis(ApiResponse {
                success: true,
                result: None,
                error: None,
            })
            .await;

        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, "Analysis failed");
    }

    #[tokio::test]
    async fn resubmission_while_analyzing_is_rejected() {
        let session = online_session().await;
        session
            .attach_file("resume.pdf".to_string(), PDF_BYTES.to_vec())
            .await;
        session.set_job_description("Engineer".to_string()).await;

        session.begin_analysis().await.unwrap();
        let rejection = session.begin_analysis().await.unwrap_err();
        assert_eq!(rejection.title, "Analysis In Progress");
    }

    #[tokio::test]
    async fn text_flow_uses_session_job_description() {
        let session = online_session().await;
        session.set_job_description("Engineer".to_string()).await;

        let job = session
            .begin_text_analysis("Ten years of Rust.")
            .await
            .unwrap();
        assert_eq!(job, "Engineer");
        assert_eq!(session.snapshot().await.phase, Phase::Analyzing);
    }

    #[tokio::test]
    async fn text_flow_rejects_empty_resume_text() {
        let session = online_session().await;
        session.set_job_description("Engineer".to_string()).await;

        let rejection = session.begin_text_analysis("   ").await.unwrap_err();
        assert_eq!(rejection.kind, NotificationKind::Warning);
        assert_eq!(session.snapshot().await.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn reset_clears_file_text_and_result_together() {
        let session = online_session().await;
        session
            .attach_file("resume.pdf".to_string(), PDF_BYTES.to_vec())
            .await;
        session.set_job_description("Engineer".to_string()).await;
        session.begin_analysis().await.unwrap();
        session.finish_analysis(sample_result(91.0)).await;

        let snapshot = session.reset().await;
        assert_eq!(snapshot.phase, Phase::Idle);
        assert!(snapshot.file.is_none());
        assert!(snapshot.job_description.is_empty());
        assert!(snapshot.result.is_none());
        // The probe result is not discarded by a reset.
        assert_eq!(snapshot.api_status, ApiStatus::Online);
    }
}
