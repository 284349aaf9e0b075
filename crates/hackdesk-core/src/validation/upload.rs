use crate::constants::{DEFAULT_UPLOAD_FOLDER, MAX_FOLDER_NAME_LENGTH};
use crate::error::AppError;
use crate::models::UploadFile;

/// Normalize MIME type by stripping parameters (e.g. "image/png; q=1" -> "image/png").
pub fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_lowercase()
}

/// Check presence, image content type and size, in that order.
pub fn validate_upload(
    file: Option<UploadFile>,
    max_bytes: usize,
) -> Result<UploadFile, AppError> {
    let file = file.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;

    if !normalize_mime_type(&file.content_type).starts_with("image/") {
        return Err(AppError::InvalidInput(
            "Invalid file type. Only image files are allowed".to_string(),
        ));
    }

    if file.size() > max_bytes {
        return Err(AppError::InvalidInput(format!(
            "File too large. Maximum size is {}MB",
            max_bytes / 1024 / 1024
        )));
    }

    Ok(file)
}

/// Resolve the target folder, defaulting to "uploads".
///
/// Folder names are a single path segment of ASCII letters, digits, `-` or `_`.
pub fn validate_folder(folder: Option<&str>) -> Result<String, AppError> {
    let folder = match folder.map(str::trim) {
        Some(f) if !f.is_empty() => f,
        _ => return Ok(DEFAULT_UPLOAD_FOLDER.to_string()),
    };

    let valid = folder.len() <= MAX_FOLDER_NAME_LENGTH
        && folder
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(AppError::InvalidInput(format!(
            "Invalid folder name '{}'",
            folder
        )));
    }

    Ok(folder.to_string())
}
