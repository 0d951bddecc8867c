//! Handlers for the `/uploads` resource.
//!
//! Receives multipart media from the public form (and the brief editor),
//! writes each file to the media root under a minted name, and returns the
//! public URLs the caller then embeds in a submission or brief.

use axum::extract::{Multipart, State};
use axum::Json;
use castdesk_core::error::CoreError;
use castdesk_core::media::{self, MediaKind};
use castdesk_core::submission::MAX_SUBMISSION_IMAGES;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for `POST /uploads/images`.
#[derive(Debug, Serialize)]
pub struct ImagesUploaded {
    pub urls: Vec<String>,
}

/// Response body for `POST /uploads/video`.
#[derive(Debug, Serialize)]
pub struct VideoUploaded {
    pub url: String,
}

/// POST /api/v1/uploads/images
///
/// Accepts up to five multipart parts named `images`. Each part must carry
/// a supported image extension and decode as an image header; anything
/// else is rejected before a byte hits disk.
pub async fn upload_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ImagesUploaded>> {
    let mut files: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name != "images" {
            continue; // ignore unknown fields
        }

        if files.len() >= MAX_SUBMISSION_IMAGES {
            return Err(AppError::Core(CoreError::Validation(format!(
                "At most {MAX_SUBMISSION_IMAGES} images per upload"
            ))));
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let ext = media::validate_extension(&filename, MediaKind::Image)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let (width, height) = media::sniff_image_dimensions(&data)?;
        tracing::debug!(%filename, width, height, bytes = data.len(), "Image upload accepted");

        files.push((ext, data.to_vec()));
    }

    if files.is_empty() {
        return Err(AppError::BadRequest(
            "Missing required 'images' field".into(),
        ));
    }

    let mut urls = Vec::with_capacity(files.len());
    for (ext, data) in files {
        let stored = write_media_file(&state, &ext, &data).await?;
        urls.push(state.config.media.public_url(&stored));
    }

    Ok(Json(ImagesUploaded { urls }))
}

/// POST /api/v1/uploads/video
///
/// Accepts a single multipart part named `video` with a supported video
/// extension.
pub async fn upload_video(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<VideoUploaded>> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name != "video" {
            continue; // ignore unknown fields
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let ext = media::validate_extension(&filename, MediaKind::Video)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        file = Some((ext, data.to_vec()));
    }

    let (ext, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'video' field".into()))?;

    let stored = write_media_file(&state, &ext, &data).await?;

    Ok(Json(VideoUploaded {
        url: state.config.media.public_url(&stored),
    }))
}

/// Write one media payload under a freshly minted name, returning the
/// stored filename.
async fn write_media_file(state: &AppState, ext: &str, data: &[u8]) -> AppResult<String> {
    let root = &state.config.media.root;
    tokio::fs::create_dir_all(root)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create media root: {e}")))?;

    let stored = media::stored_filename(ext);
    let path = root.join(&stored);
    tokio::fs::write(&path, data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write media file: {e}")))?;

    Ok(stored)
}
