//! Handlers for the `/submissions` resource.
//!
//! Submissions are nested under lists:
//! `/lists/{list_id}/submissions[/{id}]`
//!
//! Creation is public (the talent-facing form); everything else is staff.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use castdesk_core::error::CoreError;
use castdesk_core::media::{self, MediaKind};
use castdesk_core::submission::{derive_age, validate_new_submission, MAX_SUBMISSION_IMAGES};
use castdesk_core::types::DbId;
use castdesk_db::models::submission::{
    CreateSubmission, Submission, SubmissionQuery, UpdateSubmission,
};
use castdesk_db::repositories::{ListRepo, SubmissionRepo};
use castdesk_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::SubmissionBrowseParams;
use crate::state::AppState;

/// Reject media URLs whose extension does not match the slot they fill.
fn validate_media_urls(
    image_urls: &[String],
    video_url: Option<&str>,
) -> Result<(), CoreError> {
    for url in image_urls {
        if media::classify(url) != Some(MediaKind::Image) {
            return Err(CoreError::Validation(format!(
                "'{url}' is not an image URL"
            )));
        }
    }
    if let Some(url) = video_url {
        if media::classify(url) != Some(MediaKind::Video) {
            return Err(CoreError::Validation(format!(
                "'{url}' is not a video URL"
            )));
        }
    }
    Ok(())
}

/// POST /api/v1/lists/{list_id}/submissions
///
/// Public form submission. Overrides `input.list_id` with the value from
/// the URL path; derives `age` from the date of birth when not supplied.
pub async fn create(
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
    Json(mut input): Json<CreateSubmission>,
) -> AppResult<(StatusCode, Json<Submission>)> {
    ListRepo::find_by_id(&state.pool, list_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "List",
            id: list_id,
        }))?;

    validate_new_submission(
        &input.name,
        &input.surname,
        &input.contact,
        input.image_urls.len(),
    )?;
    validate_media_urls(&input.image_urls, input.video_url.as_deref())?;

    input.list_id = list_id;
    if input.age.is_none() {
        if let Some(dob) = input.date_of_birth {
            input.age = Some(derive_age(dob, chrono::Utc::now().date_naive()));
        }
    }

    let submission = SubmissionRepo::create(&state.pool, &input).await?;

    state.event_bus.publish(
        ChangeEvent::new("submission.created")
            .with_source("submission", submission.id)
            .with_payload(serde_json::json!({ "list_id": list_id })),
    );

    Ok((StatusCode::CREATED, Json(submission)))
}

/// GET /api/v1/lists/{list_id}/submissions
///
/// Staff browse with filters and pagination.
pub async fn list_by_list(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(list_id): Path<DbId>,
    Query(params): Query<SubmissionBrowseParams>,
) -> AppResult<Json<Vec<Submission>>> {
    let query = SubmissionQuery {
        gender: params.gender,
        ethnicity: params.ethnicity,
        favorites_only: params.favorites_only,
        search: params.q,
        limit: params.limit,
        offset: params.offset,
    };
    let submissions = SubmissionRepo::list_by_list(&state.pool, list_id, &query).await?;
    Ok(Json(submissions))
}

/// GET /api/v1/lists/{list_id}/submissions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((_list_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Submission>> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))?;
    Ok(Json(submission))
}

/// PUT /api/v1/lists/{list_id}/submissions/{id}
///
/// Staff edit and media attachment; only provided fields change.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path((_list_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateSubmission>,
) -> AppResult<Json<Submission>> {
    if let Some(urls) = &input.image_urls {
        if urls.len() > MAX_SUBMISSION_IMAGES {
            return Err(AppError::Core(CoreError::Validation(format!(
                "At most {MAX_SUBMISSION_IMAGES} images are allowed"
            ))));
        }
        validate_media_urls(urls, None)?;
    }
    validate_media_urls(&[], input.video_url.as_deref())?;

    let submission = SubmissionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))?;

    state.event_bus.publish(
        ChangeEvent::new("submission.updated")
            .with_source("submission", id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({ "list_id": submission.list_id })),
    );

    Ok(Json(submission))
}

/// DELETE /api/v1/lists/{list_id}/submissions/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path((_list_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = SubmissionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }));
    }

    state.event_bus.publish(
        ChangeEvent::new("submission.deleted")
            .with_source("submission", id)
            .with_actor(user.user_id),
    );

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/lists/{list_id}/submissions/{id}/audition-number
///
/// Allocate the next sequential audition number in the list. Numbers are
/// immutable once set; a second allocation attempt conflicts.
pub async fn allocate_audition_number(
    State(state): State<AppState>,
    user: AuthUser,
    Path((list_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Submission>> {
    let existing = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))?;

    if existing.list_id != list_id {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }));
    }
    if let Some(number) = existing.audition_number {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Submission already has audition number {number}"
        ))));
    }

    let submission = SubmissionRepo::allocate_audition_number(&state.pool, list_id, id)
        .await?
        .ok_or_else(|| {
            // Raced with another allocation for the same row.
            AppError::Core(CoreError::Conflict(
                "Submission was numbered concurrently".into(),
            ))
        })?;

    state.event_bus.publish(
        ChangeEvent::new("submission.numbered")
            .with_source("submission", id)
            .with_actor(user.user_id)
            .with_payload(serde_json::json!({
                "list_id": list_id,
                "audition_number": submission.audition_number,
            })),
    );

    Ok(Json(submission))
}
