//! Handlers for the `/favorites` resource.
//!
//! Favorite markers live independently of submissions, keyed by submission
//! id, exactly one marker per submission.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use castdesk_core::error::CoreError;
use castdesk_core::types::DbId;
use castdesk_db::models::favorite::{CreateFavorite, Favorite};
use castdesk_db::repositories::{FavoriteRepo, SubmissionRepo};
use castdesk_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/favorites
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = FavoriteRepo::list(&state.pool).await?;
    Ok(Json(favorites))
}

/// POST /api/v1/favorites
///
/// Mark a submission as shortlisted. A second marker for the same
/// submission conflicts (`uq_favorites_submission`).
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateFavorite>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    SubmissionRepo::find_by_id(&state.pool, input.submission_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id: input.submission_id,
        }))?;

    let favorite = FavoriteRepo::create(&state.pool, input.submission_id, Some(user.user_id)).await?;

    state.event_bus.publish(
        ChangeEvent::new("favorite.added")
            .with_source("submission", input.submission_id)
            .with_actor(user.user_id),
    );

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /api/v1/favorites/{submission_id}
///
/// Remove the marker for a submission.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(submission_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = FavoriteRepo::delete_by_submission(&state.pool, submission_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id: submission_id,
        }));
    }

    state.event_bus.publish(
        ChangeEvent::new("favorite.removed")
            .with_source("submission", submission_id)
            .with_actor(user.user_id),
    );

    Ok(StatusCode::NO_CONTENT)
}
