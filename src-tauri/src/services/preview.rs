use crate::error::AppError;
use std::path::{Path, PathBuf};

/// Writes the in-memory resume bytes under the app cache directory so the
/// system PDF viewer can open them. The desktop analog of a browser
/// object-URL preview; the file is overwritten on the next preview.
pub async fn stage_for_preview(
    cache_dir: &Path,
    file_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, AppError> {
    let preview_dir = cache_dir.join("previews");
    tokio::fs::create_dir_all(&preview_dir).await?;

    let path = preview_dir.join(sanitize_file_name(file_name));
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | ' ' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        "resume.pdf".to_string()
    } else {
        trimmed.to_string()
    }
}
