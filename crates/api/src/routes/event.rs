//! Route definition for the staff activity feed.

use axum::routing::get;
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET /    -> recent (staff, ?limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(event::recent))
}
