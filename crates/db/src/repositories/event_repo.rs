//! Repository for the append-only `events` journal.

use castdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::StoredEvent;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, event_type, source_entity_type, source_entity_id, actor_user_id, payload, created_at";

/// Provides journal writes and reads for change events.
pub struct EventRepo;

impl EventRepo {
    /// Append one event row, returning its id.
    pub async fn insert(
        pool: &PgPool,
        event_type: &str,
        source_entity_type: Option<&str>,
        source_entity_id: Option<DbId>,
        actor_user_id: Option<DbId>,
        payload: &serde_json::Value,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO events (event_type, source_entity_type, source_entity_id,
                                 actor_user_id, payload)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(event_type)
        .bind(source_entity_type)
        .bind(source_entity_id)
        .bind(actor_user_id)
        .bind(payload)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// The most recent `limit` journal entries, newest first.
    ///
    /// Backs the back-office activity feed.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<StoredEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, StoredEvent>(&query)
            .bind(limit.clamp(1, 500))
            .fetch_all(pool)
            .await
    }
}
