//! Route definitions for the `/presentations` resource.
//!
//! Creation lives under `/lists/{list_id}/presentations` (see the list
//! router); this module mounts the index, shared lookup, and delete.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::presentation;
use crate::state::AppState;

/// Routes mounted at `/presentations`.
///
/// ```text
/// GET    /                  -> list (staff)
/// GET    /shared/{token}    -> get_shared (public read-only)
/// DELETE /{id}              -> delete (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(presentation::list))
        .route("/shared/{token}", get(presentation::get_shared))
        .route("/{id}", delete(presentation::delete))
}
