//! Media file classification and stored-filename minting.
//!
//! Uploaded files keep nothing of the client-supplied name except its
//! extension; the stored name is a millisecond timestamp plus a random
//! nonce, so names never collide and never leak talent identities.

use std::io::Cursor;

use crate::error::CoreError;

/// Image extensions accepted by the upload endpoint and recognised when
/// rendering submission galleries.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Video extensions accepted by the upload endpoint.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "mov"];

/// What kind of media a file or URL refers to, judged by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Extract the lowercased extension from a filename or URL, without the dot.
///
/// Returns `None` when there is no extension at all.
pub fn file_extension(name: &str) -> Option<String> {
    let tail = name.rsplit('/').next().unwrap_or(name);
    let (stem, ext) = tail.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Classify a filename or URL as image or video by its extension.
pub fn classify(name: &str) -> Option<MediaKind> {
    let ext = file_extension(name)?;
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// Validate that `filename` carries an extension allowed for `kind`.
pub fn validate_extension(filename: &str, kind: MediaKind) -> Result<String, CoreError> {
    let ext = file_extension(filename).ok_or_else(|| {
        CoreError::Validation(format!("File '{filename}' has no extension"))
    })?;

    let allowed = match kind {
        MediaKind::Image => IMAGE_EXTENSIONS,
        MediaKind::Video => VIDEO_EXTENSIONS,
    };

    if allowed.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported extension '.{ext}'. Supported: {allowed:?}"
        )))
    }
}

/// Mint a unique stored filename for an upload, keeping only the extension.
///
/// Format: `{unix_millis}-{nonce}.{ext}`.
pub fn stored_filename(ext: &str) -> String {
    use rand::Rng;

    let millis = chrono::Utc::now().timestamp_millis();
    let nonce: u32 = rand::rng().random_range(0..1_000_000_000);
    format_stored_filename(millis, nonce, ext)
}

/// Deterministic core of [`stored_filename`], split out for tests.
pub fn format_stored_filename(millis: i64, nonce: u32, ext: &str) -> String {
    format!("{millis}-{nonce}.{ext}")
}

/// Read image dimensions from the first bytes of an upload.
///
/// Only the header is decoded; a payload whose magic bytes do not match a
/// known image format is rejected regardless of its extension.
pub fn sniff_image_dimensions(bytes: &[u8]) -> Result<(u32, u32), CoreError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CoreError::Internal(format!("Failed to sniff image format: {e}")))?;

    reader
        .into_dimensions()
        .map_err(|e| CoreError::Validation(format!("Not a decodable image: {e}")))
}
