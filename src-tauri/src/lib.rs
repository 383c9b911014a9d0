mod commands;
mod error;
mod models;
mod services;

use services::api_client::{ApiClient, DEFAULT_API_BASE};
use services::session::Session;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            let client = ApiClient::new(DEFAULT_API_BASE).expect("Failed to build HTTP client");
            app.manage(client.clone());
            app.manage(Session::new());

            // One-shot backend health probe on startup
            let app_handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let session = app_handle.state::<Session>();
                commands::health::run_health_probe(&app_handle, session.inner(), &client).await;
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::file::attach_resume,
            commands::file::remove_resume,
            commands::file::preview_resume,
            commands::analyze::set_job_description,
            commands::analyze::analyze_resume,
            commands::analyze::analyze_resume_text,
            commands::analyze::reset_session,
            commands::analyze::get_session,
            commands::analyze::gauge_animation,
            commands::health::get_api_status,
            commands::health::check_api_health,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
