//! HTTP-level integration tests for work categories and works.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json_auth};
use sqlx::PgPool;
use atelier_api::auth::password::hash_password;
use atelier_db::models::user::CreateUser;
use atelier_db::repositories::UserRepo;

async fn staff_token(pool: &PgPool) -> String {
    let hashed = hash_password("irrelevant").expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: "works_editor".to_string(),
            email: "works_editor@test.com".to_string(),
            password_hash: hashed,
            role: "editor".to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    common::test_config()
        .jwt
        .issue_access_token(user.id, "editor")
        .expect("token generation should succeed")
}

/// Seed a work category over the API and return its JSON.
async fn seed_category(pool: &PgPool, token: &str, name: &str) -> serde_json::Value {
    let body = serde_json::json!({ "name": name, "display_name": name.to_uppercase() });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/work-categories",
        token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Seed a work over the API and return its JSON.
async fn seed_work(
    pool: &PgPool,
    token: &str,
    title: &str,
    category_id: i64,
    featured: bool,
) -> serde_json::Value {
    let body = serde_json::json!({
        "title": title,
        "category_id": category_id,
        "is_featured": featured
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/works",
        token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Work category listing includes non-featured counts.
#[sqlx::test(migrations = "../../migrations")]
async fn test_work_category_counts(pool: PgPool) {
    let token = staff_token(&pool).await;
    let cat = seed_category(&pool, &token, "prints").await;
    let cat_id = cat["id"].as_i64().unwrap();

    seed_work(&pool, &token, "Plain Print", cat_id, false).await;
    seed_work(&pool, &token, "Featured Print", cat_id, true).await;

    let response = get(common::build_test_app(pool.clone()), "/api/v1/work-categories").await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed[0]["works_count"], 1);

    let response = get(
        common::build_test_app(pool),
        "/api/v1/work-categories/prints",
    )
    .await;
    let detail = body_json(response).await;
    assert_eq!(detail["works_count"], 1);
}

/// The works list honors `?ordering=`; columns outside its set are a 400,
/// even ones other resources accept.
#[sqlx::test(migrations = "../../migrations")]
async fn test_works_list_client_ordering(pool: PgPool) {
    let token = staff_token(&pool).await;
    let cat = seed_category(&pool, &token, "studies").await;
    let cat_id = cat["id"].as_i64().unwrap();

    seed_work(&pool, &token, "First Study", cat_id, false).await;
    seed_work(&pool, &token, "Second Study", cat_id, false).await;
    sqlx::query("UPDATE works SET created_at = created_at - INTERVAL '1 hour' WHERE slug = 'first-study'")
        .execute(&pool)
        .await
        .unwrap();

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/works?ordering=-created_at",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let newest_first = body_json(response).await;
    assert_eq!(newest_first[0]["slug"], "second-study");

    let response = get(
        common::build_test_app(pool),
        "/api/v1/works?ordering=title",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// `/works/by-category` requires the `category` query parameter.
#[sqlx::test(migrations = "../../migrations")]
async fn test_works_by_category_requires_param(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/v1/works/by-category").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(
        common::build_test_app(pool),
        "/api/v1/works/by-category?category=prints",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

/// Work detail includes its category and up to six related works.
#[sqlx::test(migrations = "../../migrations")]
async fn test_work_detail_with_related(pool: PgPool) {
    let token = staff_token(&pool).await;
    let cat = seed_category(&pool, &token, "drawings").await;
    let cat_id = cat["id"].as_i64().unwrap();

    seed_work(&pool, &token, "Subject", cat_id, false).await;
    for i in 0..8 {
        seed_work(&pool, &token, &format!("Sibling {i}"), cat_id, false).await;
    }

    let response = get(common::build_test_app(pool), "/api/v1/works/subject").await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;
    assert_eq!(detail["title"], "Subject");
    assert_eq!(detail["category"]["name"], "drawings");
    let related = detail["related_works"].as_array().unwrap();
    assert_eq!(related.len(), 6);
    assert!(related.iter().all(|w| w["slug"] != "subject"));
}

/// Featured works listing only includes featured entries.
#[sqlx::test(migrations = "../../migrations")]
async fn test_featured_works(pool: PgPool) {
    let token = staff_token(&pool).await;
    let cat = seed_category(&pool, &token, "ceramics").await;
    let cat_id = cat["id"].as_i64().unwrap();

    seed_work(&pool, &token, "Vase", cat_id, false).await;
    seed_work(&pool, &token, "Bowl", cat_id, true).await;

    let response = get(common::build_test_app(pool), "/api/v1/works/featured").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["slug"], "bowl");
}

/// A work referencing a missing category is rejected by the foreign key.
#[sqlx::test(migrations = "../../migrations")]
async fn test_work_with_unknown_category(pool: PgPool) {
    let token = staff_token(&pool).await;

    let body = serde_json::json!({ "title": "Orphan", "category_id": 99_999 });
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/works",
        &token,
        body,
    )
    .await;

    // 23503 foreign_key_violation surfaces as a client error, not a 500.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
