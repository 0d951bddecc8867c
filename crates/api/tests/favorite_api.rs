//! HTTP-level integration tests for the favorites (shortlist) endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, post_json, post_json_auth, staff_token,
};
use sqlx::PgPool;

async fn seed_submission(pool: &PgPool, token: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/lists",
        serde_json::json!({"name": "Shortlist"}),
        token,
    )
    .await;
    let list_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/lists/{list_id}/submissions"),
        serde_json::json!({
            "name": "Thandi",
            "surname": "Mokoena",
            "contact": "+27 82 555 1234",
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn favorite_and_unfavorite_roundtrip(pool: PgPool) {
    let token = staff_token(&pool).await;
    let submission_id = seed_submission(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/favorites",
        serde_json::json!({"submission_id": submission_id}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["submission_id"], submission_id);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/favorites", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/favorites/{submission_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/favorites", &token).await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn double_favorite_returns_409(pool: PgPool) {
    let token = staff_token(&pool).await;
    let submission_id = seed_submission(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/favorites",
        serde_json::json!({"submission_id": submission_id}),
        &token,
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/favorites",
        serde_json::json!({"submission_id": submission_id}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn favoriting_unknown_submission_returns_404(pool: PgPool) {
    let token = staff_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/favorites",
        serde_json::json!({"submission_id": 999999}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unfavoriting_without_marker_returns_404(pool: PgPool) {
    let token = staff_token(&pool).await;
    let submission_id = seed_submission(&pool, &token).await;

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/favorites/{submission_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
