use std::path::Path;

use chrono::Utc;
use tokio::fs;

use crate::config::get_config;
use crate::error::{Error, Result};

const ALLOWED_EXTS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Writes an uploaded listing image into the public uploads directory
/// under a timestamp-prefixed name and returns the stored file name.
/// Collision avoidance relies on the millisecond prefix alone.
pub async fn save_image_file(filename: &str, data: &bytes::Bytes) -> Result<String> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "bin".to_string());

    if !ALLOWED_EXTS.contains(&ext.as_str()) {
        return Err(Error::BadRequest(format!(
            "File type .{} is not allowed",
            ext
        )));
    }

    if (ext == "jpg" || ext == "jpeg") && !data.starts_with(&[0xFF, 0xD8]) {
        return Err(Error::BadRequest("Invalid JPEG file content".into()));
    }
    if ext == "png" && !data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Err(Error::BadRequest("Invalid PNG file content".into()));
    }

    let uploads_dir = &get_config().uploads_dir;
    fs::create_dir_all(uploads_dir).await?;

    let stored_name = format!(
        "{}_{}",
        Utc::now().timestamp_millis(),
        sanitize_file_name(filename)
    );
    let file_path = format!("{}/{}", uploads_dir, stored_name);

    fs::write(&file_path, data).await.map_err(|e| {
        tracing::error!("Failed to write image file: {}", e);
        Error::Internal(format!("Failed to save file: {}", e))
    })?;

    Ok(stored_name)
}

/// Strips any path components so the stored name cannot escape the
/// uploads directory.
fn sanitize_file_name(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    base.replace(char::is_whitespace, "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize_file_name("../../etc/passwd.png"), "passwd.png");
        assert_eq!(sanitize_file_name("C:\\pics\\logo.jpg"), "logo.jpg");
        assert_eq!(sanitize_file_name("my logo.png"), "my_logo.png");
    }
}
