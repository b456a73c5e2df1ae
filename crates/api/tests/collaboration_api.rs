//! HTTP-level integration tests for the public collaboration intake form
//! and the admin review workflow.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use sqlx::PgPool;
use atelier_api::auth::password::hash_password;
use atelier_db::models::user::CreateUser;
use atelier_db::repositories::UserRepo;

async fn admin_token(pool: &PgPool) -> String {
    let hashed = hash_password("irrelevant").expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: "inbox_admin".to_string(),
            email: "inbox_admin@test.com".to_string(),
            password_hash: hashed,
            role: "admin".to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    common::test_config()
        .jwt
        .issue_access_token(user.id, "admin")
        .expect("token generation should succeed")
}

fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "name": "Ada Lovelace",
        "email": "Ada@Example.COM",
        "project_type": "design",
        "message": "We would like to discuss a storefront redesign."
    })
}

// ---------------------------------------------------------------------------
// Public intake
// ---------------------------------------------------------------------------

/// A valid submission is accepted anonymously, with the email lowercased.
#[sqlx::test(migrations = "../../migrations")]
async fn test_submit_collaboration(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/collaborations",
        valid_submission(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["email"], "ada@example.com");
    assert_eq!(json["status"], "new");
    assert_eq!(json["reviewed"], false);
}

/// A message under twenty characters fails validation with a field error.
#[sqlx::test(migrations = "../../migrations")]
async fn test_short_message_rejected(pool: PgPool) {
    let mut body = valid_submission();
    body["message"] = serde_json::json!("Nineteen chars long"); // 19 chars

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/collaborations",
        body,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["message"].is_array());

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM collaborations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

/// Exactly twenty characters passes the length check.
#[sqlx::test(migrations = "../../migrations")]
async fn test_twenty_char_message_accepted(pool: PgPool) {
    let mut body = valid_submission();
    body["message"] = serde_json::json!("Twenty chars exactly"); // 20 chars

    let response = post_json(common::build_test_app(pool), "/api/v1/collaborations", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// A malformed email address fails validation.
#[sqlx::test(migrations = "../../migrations")]
async fn test_bad_email_rejected(pool: PgPool) {
    let mut body = valid_submission();
    body["email"] = serde_json::json!("not-an-email");

    let response = post_json(common::build_test_app(pool), "/api/v1/collaborations", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A project type outside the intake enum is rejected.
#[sqlx::test(migrations = "../../migrations")]
async fn test_unknown_project_type_rejected(pool: PgPool) {
    let mut body = valid_submission();
    body["project_type"] = serde_json::json!("skywriting");

    let response = post_json(common::build_test_app(pool), "/api/v1/collaborations", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Admin review workflow
// ---------------------------------------------------------------------------

/// The full review flow: list, mark reviewed, set status, add notes.
#[sqlx::test(migrations = "../../migrations")]
async fn test_review_workflow(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/collaborations",
        valid_submission(),
    )
    .await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/collaborations",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/collaborations/{id}/mark-reviewed"),
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let reviewed = body_json(response).await;
    assert_eq!(reviewed["reviewed"], true);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/collaborations/{id}/update-status"),
        &token,
        serde_json::json!({ "status": "contacted" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "contacted");

    let response = post_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/collaborations/{id}/notes"),
        &token,
        serde_json::json!({ "admin_notes": "Call on Monday" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let noted = body_json(response).await;
    assert_eq!(noted["admin_notes"], "Call on Monday");
}

/// An unknown status value returns 400 and the row is unchanged.
#[sqlx::test(migrations = "../../migrations")]
async fn test_invalid_status_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/collaborations",
        valid_submission(),
    )
    .await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/collaborations/{id}/update-status"),
        &token,
        serde_json::json!({ "status": "bogus" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/collaborations/{id}"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "new");
}

/// Status filtering on the admin list.
#[sqlx::test(migrations = "../../migrations")]
async fn test_list_filter_by_status(pool: PgPool) {
    let token = admin_token(&pool).await;

    for _ in 0..2 {
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/collaborations",
            valid_submission(),
        )
        .await;
    }

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/collaborations?status=archived",
        &token,
    )
    .await;
    let archived = body_json(response).await;
    assert_eq!(archived.as_array().unwrap().len(), 0);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/collaborations?status=new",
        &token,
    )
    .await;
    let fresh = body_json(response).await;
    assert_eq!(fresh.as_array().unwrap().len(), 2);
}

/// The admin list sorts by `?ordering=status`; unknown columns are a 400.
#[sqlx::test(migrations = "../../migrations")]
async fn test_list_client_ordering(pool: PgPool) {
    let token = admin_token(&pool).await;

    for _ in 0..2 {
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/collaborations",
            valid_submission(),
        )
        .await;
    }
    sqlx::query("UPDATE collaborations SET status = 'archived' WHERE id = (SELECT MIN(id) FROM collaborations)")
        .execute(&pool)
        .await
        .unwrap();

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/collaborations?ordering=status",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let sorted = body_json(response).await;
    assert_eq!(sorted[0]["status"], "archived");
    assert_eq!(sorted[1]["status"], "new");

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/collaborations?ordering=email",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Deleting a request removes it; a second delete 404s.
#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_request(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/collaborations",
        valid_submission(),
    )
    .await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let response = common::delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/collaborations/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = common::delete_auth(
        common::build_test_app(pool),
        &format!("/api/v1/collaborations/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
