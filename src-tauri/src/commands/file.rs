use crate::error::AppError;
use crate::models::session_types::SessionSnapshot;
use crate::services::preview;
use crate::services::session::Session;
use std::path::Path;
use tauri::{AppHandle, Manager, State};
use tauri_plugin_opener::OpenerExt;

/// Takes a path picked in the file dialog or dropped onto the window. Non-PDF
/// content is ignored and the previous selection kept, so the returned
/// snapshot is simply the current state either way.
#[tauri::command]
pub async fn attach_resume(
    session: State<'_, Session>,
    path: String,
) -> Result<SessionSnapshot, AppError> {
    let file_path = Path::new(&path);
    let bytes = tokio::fs::read(file_path).await?;
    let name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "resume.pdf".to_string());

    session.attach_file(name, bytes).await;
    Ok(session.snapshot().await)
}

#[tauri::command]
pub async fn remove_resume(session: State<'_, Session>) -> Result<SessionSnapshot, AppError> {
    session.remove_file().await;
    Ok(session.snapshot().await)
}

/// Stages the held bytes to the app cache and opens them with the system
/// PDF viewer.
#[tauri::command]
pub async fn preview_resume(
    app: AppHandle,
    session: State<'_, Session>,
) -> Result<(), AppError> {
    let file = session
        .selected_file()
        .await
        .ok_or_else(|| AppError::from("No resume attached"))?;

    let cache_dir = app.path().app_cache_dir()?;
    let staged = preview::stage_for_preview(&cache_dir, &file.name, &file.bytes).await?;

    app.opener()
        .open_path(staged.to_string_lossy(), None::<&str>)
        .map_err(|e| AppError::from(e.to_string()))
}
