//! Route definitions for the `/briefs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::brief;
use crate::state::AppState;

/// Routes mounted at `/briefs`.
///
/// ```text
/// GET    /        -> list (staff)
/// POST   /        -> create (staff)
/// GET    /{id}    -> get_by_id (public shareable page)
/// DELETE /{id}    -> delete (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(brief::list).post(brief::create))
        .route("/{id}", get(brief::get_by_id).delete(brief::delete))
}
