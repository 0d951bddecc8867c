//! Handlers for the `/presentations` resource.
//!
//! A presentation is a frozen snapshot of a list's favorited submissions,
//! addressable read-only through an unguessable share token.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use castdesk_core::error::CoreError;
use castdesk_core::types::DbId;
use castdesk_db::models::presentation::{CreatePresentation, Presentation};
use castdesk_db::repositories::{ListRepo, PresentationRepo, SubmissionRepo};
use castdesk_events::ChangeEvent;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/lists/{list_id}/presentations
///
/// Snapshot the list's currently-favorited submissions. Conflicts when the
/// list has no favorites to present.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(list_id): Path<DbId>,
    Json(input): Json<CreatePresentation>,
) -> AppResult<(StatusCode, Json<Presentation>)> {
    let list = ListRepo::find_by_id(&state.pool, list_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "List",
            id: list_id,
        }))?;

    let favorited = SubmissionRepo::list_favorited_by_list(&state.pool, list_id).await?;
    if favorited.is_empty() {
        return Err(AppError::Core(CoreError::Conflict(
            "No favorites selected for this list".into(),
        )));
    }

    let title = input
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| list.name.clone());
    let entries = serde_json::to_value(&favorited)
        .map_err(|e| AppError::InternalError(format!("Snapshot serialization error: {e}")))?;
    let share_token = Uuid::new_v4();

    let presentation = PresentationRepo::create(
        &state.pool,
        list_id,
        &title,
        share_token,
        &entries,
        Some(user.user_id),
    )
    .await?;

    state.event_bus.publish(
        ChangeEvent::new("presentation.created")
            .with_source("presentation", presentation.id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({
                "list_id": list_id,
                "entry_count": favorited.len(),
            })),
    );

    Ok((StatusCode::CREATED, Json(presentation)))
}

/// GET /api/v1/presentations
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Presentation>>> {
    let presentations = PresentationRepo::list(&state.pool).await?;
    Ok(Json(presentations))
}

/// GET /api/v1/presentations/shared/{token}
///
/// Public read-only view resolved by share token. Serves the frozen
/// entries, never the live rows.
pub async fn get_shared(
    State(state): State<AppState>,
    Path(token): Path<Uuid>,
) -> AppResult<Json<Presentation>> {
    // Share tokens are not database ids, so the generic row-not-found
    // mapping produces the 404 here.
    let presentation = PresentationRepo::find_by_share_token(&state.pool, token)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
    Ok(Json(presentation))
}

/// DELETE /api/v1/presentations/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PresentationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Presentation",
            id,
        }));
    }

    state.event_bus.publish(
        ChangeEvent::new("presentation.deleted")
            .with_source("presentation", id)
            .with_actor(user.user_id),
    );

    Ok(StatusCode::NO_CONTENT)
}
