pub mod analyze;
pub mod file;
pub mod health;

use crate::models::session_types::Notification;
use tauri::{AppHandle, Emitter};

pub(crate) fn emit_notification(app: &AppHandle, notification: &Notification) {
    let _ = app.emit("notification", notification);
}
