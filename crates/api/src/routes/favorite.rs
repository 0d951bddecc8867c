//! Route definitions for the `/favorites` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
///
/// ```text
/// GET    /                  -> list (staff)
/// POST   /                  -> create (staff)
/// DELETE /{submission_id}   -> delete (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorite::list).post(favorite::create))
        .route("/{submission_id}", delete(favorite::delete))
}
