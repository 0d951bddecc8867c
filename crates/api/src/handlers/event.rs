//! Handler for the staff activity feed.

use axum::extract::{Query, State};
use axum::Json;
use castdesk_db::models::event::StoredEvent;
use castdesk_db::repositories::EventRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::ActivityParams;
use crate::state::AppState;

/// Default number of journal entries returned.
const DEFAULT_ACTIVITY_LIMIT: i64 = 50;

/// GET /api/v1/events
///
/// The most recent change-journal entries, newest first. Backs the
/// back-office activity feed.
pub async fn recent(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ActivityParams>,
) -> AppResult<Json<Vec<StoredEvent>>> {
    let events =
        EventRepo::recent(&state.pool, params.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT)).await?;
    Ok(Json(events))
}
