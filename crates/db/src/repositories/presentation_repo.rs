//! Repository for the `presentations` table.

use castdesk_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::presentation::Presentation;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, list_id, title, share_token, entries, created_by, created_at";

/// Provides snapshot storage and shared-link lookup for presentations.
pub struct PresentationRepo;

impl PresentationRepo {
    /// Insert a new presentation snapshot, returning the created row.
    ///
    /// `entries` is the frozen JSON array of favorited submissions; the
    /// caller assembles it before the insert.
    pub async fn create(
        pool: &PgPool,
        list_id: DbId,
        title: &str,
        share_token: Uuid,
        entries: &serde_json::Value,
        created_by: Option<DbId>,
    ) -> Result<Presentation, sqlx::Error> {
        let query = format!(
            "INSERT INTO presentations (list_id, title, share_token, entries, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Presentation>(&query)
            .bind(list_id)
            .bind(title)
            .bind(share_token)
            .bind(entries)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a presentation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Presentation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM presentations WHERE id = $1");
        sqlx::query_as::<_, Presentation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a public share token to its presentation.
    pub async fn find_by_share_token(
        pool: &PgPool,
        token: Uuid,
    ) -> Result<Option<Presentation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM presentations WHERE share_token = $1");
        sqlx::query_as::<_, Presentation>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// List all presentations, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Presentation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM presentations ORDER BY created_at DESC");
        sqlx::query_as::<_, Presentation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a presentation by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM presentations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
