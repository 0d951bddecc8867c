//! Audition list model and DTOs.

use castdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `lists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct List {
    pub id: DbId,
    pub name: String,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A list together with its current submission count, for index views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListSummary {
    pub id: DbId,
    pub name: String,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub submission_count: i64,
}

/// DTO for creating a new audition list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateList {
    pub name: String,
}
