use crate::error::AppError;
use crate::models::gauge_types::GaugePlan;
use crate::models::session_types::SessionSnapshot;
use crate::services::api_client::ApiClient;
use crate::services::gauge;
use crate::services::session::Session;
use log::info;
use tauri::{AppHandle, State};

#[tauri::command]
pub async fn set_job_description(
    session: State<'_, Session>,
    text: String,
) -> Result<SessionSnapshot, AppError> {
    session.set_job_description(text).await;
    Ok(session.snapshot().await)
}

/// Runs the full file flow: validate, upload, fold the envelope back into the
/// session. Rejections and failures surface as one toast each; the command
/// itself only errs on local faults.
#[tauri::command]
pub async fn analyze_resume(
    app: AppHandle,
    session: State<'_, Session>,
    client: State<'_, ApiClient>,
) -> Result<SessionSnapshot, AppError> {
    let (file, job_description) = match session.begin_analysis().await {
        Ok(input) => input,
        Err(notification) => {
            super::emit_notification(&app, &notification);
            return Ok(session.snapshot().await);
        }
    };

    info!("Submitting resume '{}' for analysis", file.name);
    let response = client
        .analyze_file(&file.name, file.bytes, &job_description)
        .await;

    let (snapshot, notification) = session.finish_analysis(response).await;
    super::emit_notification(&app, &notification);
    Ok(snapshot)
}

/// Pasted-resume variant of the same flow, POSTing JSON instead of multipart.
#[tauri::command]
pub async fn analyze_resume_text(
    app: AppHandle,
    session: State<'_, Session>,
    client: State<'_, ApiClient>,
    resume_text: String,
) -> Result<SessionSnapshot, AppError> {
    let job_description = match session.begin_text_analysis(&resume_text).await {
        Ok(job) => job,
        Err(notification) => {
            super::emit_notification(&app, &notification);
            return Ok(session.snapshot().await);
        }
    };

    info!("Submitting pasted resume text for analysis");
    let response = client.analyze_text(&resume_text, &job_description).await;

    let (snapshot, notification) = session.finish_analysis(response).await;
    super::emit_notification(&app, &notification);
    Ok(snapshot)
}

#[tauri::command]
pub async fn reset_session(session: State<'_, Session>) -> Result<SessionSnapshot, AppError> {
    Ok(session.reset().await)
}

#[tauri::command]
pub async fn get_session(session: State<'_, Session>) -> Result<SessionSnapshot, AppError> {
    Ok(session.snapshot().await)
}

#[tauri::command]
pub fn gauge_animation(score: f64, size: Option<u32>, stroke_width: Option<u32>) -> GaugePlan {
    gauge::animation_plan(
        score,
        size.unwrap_or(gauge::DEFAULT_SIZE),
        stroke_width.unwrap_or(gauge::DEFAULT_STROKE_WIDTH),
    )
}
