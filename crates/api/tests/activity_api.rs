//! HTTP-level integration tests for the staff activity feed.

mod common;

use axum::http::StatusCode;
use castdesk_db::repositories::EventRepo;
use common::{body_json, get, get_auth, staff_token};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn activity_feed_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/events").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn activity_feed_returns_newest_first(pool: PgPool) {
    let token = staff_token(&pool).await;

    // Seed the journal directly; in production the persistence task writes
    // these rows from the event bus.
    for (i, event_type) in ["list.created", "submission.created", "favorite.added"]
        .iter()
        .enumerate()
    {
        EventRepo::insert(
            &pool,
            event_type,
            Some("submission"),
            Some(i as i64 + 1),
            None,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    }

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/events", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let events = json.as_array().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["event_type"], "favorite.added");
    assert_eq!(events[2]["event_type"], "list.created");

    // ?limit= narrows the window.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/events?limit=1", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}
