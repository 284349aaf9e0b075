//! Shared key generation for uploaded assets.
//!
//! Key format: `{folder}/{token}-{unix millis}.{ext}`.

use hackdesk_core::validation::normalize_mime_type;
use hackdesk_core::IdStrategy;

/// Generate a randomized file name that preserves the original extension.
///
/// Falls back to the content subtype (`image/png` -> `png`) when the original
/// name has no usable extension.
pub fn asset_file_name(ids: &dyn IdStrategy, original_name: &str, content_type: &str) -> String {
    let extension = extension_of(original_name).unwrap_or_else(|| {
        let mime = normalize_mime_type(content_type);
        let subtype = mime.rsplit('/').next().unwrap_or_default();
        let subtype = subtype.split('+').next().unwrap_or_default();
        sanitize_extension(subtype).unwrap_or_else(|| "bin".to_string())
    });

    format!(
        "{}-{}.{}",
        ids.token(),
        ids.now().timestamp_millis(),
        extension
    )
}

/// Object key for a file inside a folder
pub fn object_key(folder: &str, file_name: &str) -> String {
    format!("{}/{}", folder.trim_matches('/'), file_name)
}

fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    sanitize_extension(ext)
}

fn sanitize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim().to_lowercase();
    let valid = !ext.is_empty() && ext.len() <= 10 && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then_some(ext)
}
