//! Repository for the `lists` table.

use castdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::list::{CreateList, List, ListSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_by, created_at, updated_at";

/// Provides CRUD operations for audition lists.
pub struct ListRepo;

impl ListRepo {
    /// Insert a new list, returning the created row.
    ///
    /// List names are unique (`uq_lists_name`); a duplicate surfaces as a
    /// database unique violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateList,
        created_by: Option<DbId>,
    ) -> Result<List, sqlx::Error> {
        let query = format!(
            "INSERT INTO lists (name, created_by)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, List>(&query)
            .bind(&input.name)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a list by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<List>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lists WHERE id = $1");
        sqlx::query_as::<_, List>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all audition lists with their submission counts, alphabetically.
    pub async fn list_with_counts(pool: &PgPool) -> Result<Vec<ListSummary>, sqlx::Error> {
        sqlx::query_as::<_, ListSummary>(
            "SELECT l.id, l.name, l.created_by, l.created_at, l.updated_at,
                    COUNT(s.id) AS submission_count
             FROM lists l
             LEFT JOIN submissions s ON s.list_id = l.id
             GROUP BY l.id
             ORDER BY l.name",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete a list (submissions cascade). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every submission in a list but keep the list itself.
    ///
    /// Returns the number of submissions removed.
    pub async fn clear_submissions(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM submissions WHERE list_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
