//! Favorite (shortlist) marker model and DTOs.

use castdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `favorites` table.
///
/// Stored independently of the submission row; at most one marker exists
/// per submission.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub submission_id: DbId,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for marking a submission as shortlisted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFavorite {
    pub submission_id: DbId,
}
