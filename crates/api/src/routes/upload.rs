//! Route definitions for the `/uploads` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// Both endpoints are public: talent uploads media before submitting the
/// form. The multipart body cap comes from `MAX_UPLOAD_BYTES`.
///
/// ```text
/// POST /images    -> upload_images (multipart, up to 5 `images` parts)
/// POST /video     -> upload_video (multipart, one `video` part)
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/images", post(upload::upload_images))
        .route("/video", post(upload::upload_video))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
