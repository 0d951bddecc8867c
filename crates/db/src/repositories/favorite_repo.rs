//! Repository for the `favorites` table.

use castdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::Favorite;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, submission_id, created_by, created_at";

/// Provides shortlist-marker operations.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Mark a submission as favorited, returning the created marker.
    ///
    /// A second marker for the same submission violates
    /// `uq_favorites_submission` and surfaces as a conflict.
    pub async fn create(
        pool: &PgPool,
        submission_id: DbId,
        created_by: Option<DbId>,
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (submission_id, created_by)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(submission_id)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// List all favorite markers, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites ORDER BY created_at DESC");
        sqlx::query_as::<_, Favorite>(&query).fetch_all(pool).await
    }

    /// Remove the marker for a submission. Returns `true` if one existed.
    pub async fn delete_by_submission(
        pool: &PgPool,
        submission_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE submission_id = $1")
            .bind(submission_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
