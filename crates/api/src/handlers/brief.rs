//! Handlers for the `/briefs` resource.
//!
//! Brief detail pages are shareable with talent, so fetching a single brief
//! is public; creating, listing, and deleting are staff operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use castdesk_core::brief::validate_new_brief;
use castdesk_core::error::CoreError;
use castdesk_core::media::{self, MediaKind};
use castdesk_core::types::DbId;
use castdesk_db::models::brief::{Brief, CreateBrief};
use castdesk_db::repositories::BriefRepo;
use castdesk_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/briefs
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Brief>>> {
    let briefs = BriefRepo::list(&state.pool).await?;
    Ok(Json(briefs))
}

/// POST /api/v1/briefs
///
/// Create a casting brief. The returned id forms the shareable link.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateBrief>,
) -> AppResult<(StatusCode, Json<Brief>)> {
    validate_new_brief(&input.title, &input.agency, &input.shoot, &input.roles)?;

    for url in &input.image_urls {
        if media::classify(url) != Some(MediaKind::Image) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "'{url}' is not an image URL"
            ))));
        }
    }

    let brief = BriefRepo::create(&state.pool, &input, Some(user.user_id)).await?;

    state.event_bus.publish(
        ChangeEvent::new("brief.created")
            .with_source("brief", brief.id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({ "title": brief.title })),
    );

    Ok((StatusCode::CREATED, Json(brief)))
}

/// GET /api/v1/briefs/{id}
///
/// Public: the casting-call page talent opens from a shared link.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Brief>> {
    let brief = BriefRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Brief",
            id,
        }))?;
    Ok(Json(brief))
}

/// DELETE /api/v1/briefs/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BriefRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Brief",
            id,
        }));
    }

    state.event_bus.publish(
        ChangeEvent::new("brief.deleted")
            .with_source("brief", id)
            .with_actor(user.user_id),
    );

    Ok(StatusCode::NO_CONTENT)
}
