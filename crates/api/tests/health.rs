//! Integration tests for the health endpoint and cross-cutting middleware.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

/// `/health` reports service status, crate version, and database health.
#[sqlx::test(migrations = "../../migrations")]
async fn test_health_endpoint(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

/// Every response carries an `x-request-id` header set by the middleware.
#[sqlx::test(migrations = "../../migrations")]
async fn test_request_id_header(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header must be present");
    assert!(!request_id.is_empty());
}

/// Unknown routes fall through to a plain 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_unknown_route(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
