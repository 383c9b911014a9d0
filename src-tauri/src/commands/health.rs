use crate::error::AppError;
use crate::models::analysis_types::ApiStatus;
use crate::models::session_types::Notification;
use crate::services::api_client::ApiClient;
use crate::services::session::Session;
use log::info;
use tauri::{AppHandle, Emitter, State};

#[tauri::command]
pub async fn get_api_status(session: State<'_, Session>) -> Result<ApiStatus, AppError> {
    Ok(session.api_status().await)
}

/// Manual re-probe, for after the user starts the backend. The startup probe
/// itself runs once from setup.
#[tauri::command]
pub async fn check_api_health(
    app: AppHandle,
    session: State<'_, Session>,
    client: State<'_, ApiClient>,
) -> Result<ApiStatus, AppError> {
    Ok(run_health_probe(&app, &session, &client).await)
}

pub(crate) async fn run_health_probe(
    app: &AppHandle,
    session: &Session,
    client: &ApiClient,
) -> ApiStatus {
    let health = client.check_health().await;
    let status = session.apply_health(&health).await;
    info!(
        "Health probe: status={:?} gemini_configured={}",
        status, health.gemini_configured
    );

    let _ = app.emit(
        "api-status",
        serde_json::json!({
            "status": status,
            "gemini_configured": health.gemini_configured,
        }),
    );

    if status == ApiStatus::Offline {
        super::emit_notification(
            app,
            &Notification::error(
                "API Offline",
                "Backend API is not responding. Please start your Flask server.",
            ),
        );
    } else if !health.gemini_configured {
        super::emit_notification(
            app,
            &Notification::warning(
                "AI Not Configured",
                "Gemini API key not found. AI analysis will be limited.",
            ),
        );
    }

    status
}
