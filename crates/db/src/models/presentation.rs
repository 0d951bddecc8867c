//! Presentation snapshot model and DTOs.

use castdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `presentations` table.
///
/// `entries` is a frozen JSON array of the list's favorited submissions at
/// creation time; later edits to the live rows must not show through a
/// shared link.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Presentation {
    pub id: DbId,
    pub list_id: DbId,
    pub title: String,
    pub share_token: Uuid,
    pub entries: serde_json::Value,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a presentation snapshot.
///
/// The title defaults to the list name when omitted; the entries are
/// assembled server-side from the list's current favorites.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePresentation {
    pub title: Option<String>,
}
