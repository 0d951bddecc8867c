//! Handlers for the `/lists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use castdesk_core::error::CoreError;
use castdesk_core::types::DbId;
use castdesk_db::models::list::{CreateList, List, ListSummary};
use castdesk_db::repositories::ListRepo;
use castdesk_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/lists
///
/// All audition lists with submission counts, alphabetically.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<ListSummary>>> {
    let lists = ListRepo::list_with_counts(&state.pool).await?;
    Ok(Json(lists))
}

/// POST /api/v1/lists
///
/// Create an audition list. Duplicate names conflict (`uq_lists_name`).
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateList>,
) -> AppResult<(StatusCode, Json<List>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "List name is required".into(),
        )));
    }

    let created = ListRepo::create(&state.pool, &input, Some(user.user_id)).await?;

    state.event_bus.publish(
        ChangeEvent::new("list.created")
            .with_source("list", created.id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({ "name": created.name })),
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/lists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<List>> {
    let list = ListRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "List", id }))?;
    Ok(Json(list))
}

/// DELETE /api/v1/lists/{id}
///
/// Deletes the list and all of its submissions.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ListRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "List", id }));
    }

    state.event_bus.publish(
        ChangeEvent::new("list.deleted")
            .with_source("list", id)
            .with_actor(user.user_id),
    );

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/lists/{id}/clear
///
/// Removes every submission in the list but keeps the list itself.
pub async fn clear(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    // 404 before clearing so an empty result is distinguishable from a
    // missing list.
    ListRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "List", id }))?;

    let removed = ListRepo::clear_submissions(&state.pool, id).await?;

    state.event_bus.publish(
        ChangeEvent::new("list.cleared")
            .with_source("list", id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({ "removed": removed })),
    );

    Ok(Json(serde_json::json!({ "removed": removed })))
}
