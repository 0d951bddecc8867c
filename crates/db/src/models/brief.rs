//! Casting brief model and DTOs.

use castdesk_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `briefs` table.
///
/// `content` is the rich-text body produced by the client-side editor and
/// is stored verbatim; the server treats it as an opaque HTML string.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brief {
    pub id: DbId,
    pub title: String,
    pub agency: String,
    pub shoot: String,
    pub callback: Option<String>,
    pub wardrobe: Option<String>,
    pub media_usage: Option<String>,
    pub venue: Option<String>,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub roles: String,
    pub rate: Option<String>,
    pub content: String,
    pub image_urls: Vec<String>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new casting brief.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBrief {
    pub title: String,
    pub agency: String,
    pub shoot: String,
    pub callback: Option<String>,
    pub wardrobe: Option<String>,
    pub media_usage: Option<String>,
    pub venue: Option<String>,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub roles: String,
    pub rate: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
}
