//! Repository for the `briefs` table.

use castdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::brief::{Brief, CreateBrief};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, agency, shoot, callback, wardrobe, media_usage, venue, \
                        date, notes, roles, rate, content, image_urls, created_by, \
                        created_at, updated_at";

/// Provides CRUD operations for casting briefs.
pub struct BriefRepo;

impl BriefRepo {
    /// Insert a new brief, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBrief,
        created_by: Option<DbId>,
    ) -> Result<Brief, sqlx::Error> {
        let query = format!(
            "INSERT INTO briefs (title, agency, shoot, callback, wardrobe, media_usage,
                                 venue, date, notes, roles, rate, content, image_urls, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Brief>(&query)
            .bind(&input.title)
            .bind(&input.agency)
            .bind(&input.shoot)
            .bind(&input.callback)
            .bind(&input.wardrobe)
            .bind(&input.media_usage)
            .bind(&input.venue)
            .bind(input.date)
            .bind(&input.notes)
            .bind(&input.roles)
            .bind(&input.rate)
            .bind(&input.content)
            .bind(&input.image_urls)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a brief by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Brief>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM briefs WHERE id = $1");
        sqlx::query_as::<_, Brief>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all briefs, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Brief>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM briefs ORDER BY created_at DESC");
        sqlx::query_as::<_, Brief>(&query).fetch_all(pool).await
    }

    /// Delete a brief by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM briefs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
