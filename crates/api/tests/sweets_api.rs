//! HTTP-level integration tests for CRUD and authorization on `/api/sweets`.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_user, delete_auth, get, post_json_auth, put_json_auth,
    seed_sweet,
};
use sqlx::PgPool;

fn fudge_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Sea Salt Fudge",
        "category": "Chocolate",
        "price": 3.5,
        "quantity": 10,
        "description": "Soft fudge with sea salt flakes",
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_requires_authentication(pool: PgPool) {
    let app = build_test_app(pool);
    let response = common::post_json(app, "/api/sweets", fudge_body()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_created_sweet_with_creator(pool: PgPool) {
    let user = create_user(&pool, "alice", "user").await;

    let app = build_test_app(pool);
    let response = post_json_auth(app, "/api/sweets", &user.token, fudge_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Sweet added successfully");
    let sweet = &json["sweet"];
    assert_eq!(sweet["name"], "Sea Salt Fudge");
    assert_eq!(sweet["category"], "chocolate", "category is lowercased");
    assert_eq!(sweet["price"], 3.5);
    assert_eq!(sweet["quantity"], 10);
    assert_eq!(sweet["createdBy"]["username"], "alice");
    assert!(sweet["createdAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_invalid_fields_before_any_mutation(pool: PgPool) {
    let user = create_user(&pool, "alice", "user").await;

    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/sweets",
        &user.token,
        serde_json::json!({
            "name": "",
            "category": "fudge",
            "price": -1.0,
            "quantity": -5,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let errors = json["errors"].as_array().expect("errors array");
    let fields: Vec<&str> = errors.iter().map(|e| e["field"].as_str().unwrap()).collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"category"));
    assert!(fields.contains(&"price"));
    assert!(fields.contains(&"quantity"));

    // Nothing was persisted.
    let app = build_test_app(pool);
    let listing = body_json(get(app, "/api/sweets").await).await;
    assert_eq!(listing["pagination"]["total"], 0);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_returns_sweet_or_404(pool: PgPool) {
    let user = create_user(&pool, "alice", "user").await;
    let id = seed_sweet(&pool, user.id, "Lemon Drops", "candy", 1.2, 6).await;

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/sweets/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Lemon Drops");
    assert_eq!(json["createdBy"]["id"], user.id);

    let app = build_test_app(pool);
    let missing = get(app, "/api/sweets/99999").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let json = body_json(missing).await;
    assert_eq!(json["message"], "Sweet not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_paginates_with_ceil_page_count(pool: PgPool) {
    let user = create_user(&pool, "alice", "user").await;
    for i in 0..25 {
        seed_sweet(&pool, user.id, &format!("Sweet {i}"), "candy", 1.0, 1).await;
    }

    let app = build_test_app(pool.clone());
    let first = body_json(get(app, "/api/sweets?page=1&limit=10").await).await;
    assert_eq!(first["sweets"].as_array().unwrap().len(), 10);
    assert_eq!(first["pagination"]["current"], 1);
    assert_eq!(first["pagination"]["pages"], 3);
    assert_eq!(first["pagination"]["total"], 25);

    let app = build_test_app(pool.clone());
    let last = body_json(get(app, "/api/sweets?page=3&limit=10").await).await;
    assert_eq!(last["sweets"].as_array().unwrap().len(), 5);
    assert_eq!(last["pagination"]["current"], 3);

    // Defaults: page=1, limit=10.
    let app = build_test_app(pool);
    let defaulted = body_json(get(app, "/api/sweets").await).await;
    assert_eq!(defaulted["sweets"].as_array().unwrap().len(), 10);
    assert_eq!(defaulted["pagination"]["current"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn categories_listing_is_the_fixed_set(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/sweets/categories/list").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["categories"],
        serde_json::json!([
            "chocolate", "candy", "gummy", "lollipop", "cake", "cookie", "other"
        ])
    );
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_can_update_a_subset_of_fields(pool: PgPool) {
    let owner = create_user(&pool, "alice", "user").await;
    let id = seed_sweet(&pool, owner.id, "Lemon Drops", "candy", 1.2, 6).await;

    let app = build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/sweets/{id}"),
        &owner.token,
        serde_json::json!({ "price": 1.5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Sweet updated successfully");
    assert_eq!(json["sweet"]["price"], 1.5);
    assert_eq!(json["sweet"]["name"], "Lemon Drops", "untouched field kept");
    assert_eq!(json["sweet"]["quantity"], 6, "untouched field kept");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_can_update_someone_elses_sweet(pool: PgPool) {
    let owner = create_user(&pool, "alice", "user").await;
    let admin = create_user(&pool, "root", "admin").await;
    let id = seed_sweet(&pool, owner.id, "Lemon Drops", "candy", 1.2, 6).await;

    let app = build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/sweets/{id}"),
        &admin.token,
        serde_json::json!({ "name": "Sour Lemon Drops" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["sweet"]["name"], "Sour Lemon Drops");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_owner_non_admin_update_is_forbidden(pool: PgPool) {
    let owner = create_user(&pool, "alice", "user").await;
    let other = create_user(&pool, "bob", "user").await;
    let id = seed_sweet(&pool, owner.id, "Lemon Drops", "candy", 1.2, 6).await;

    let app = build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/sweets/{id}"),
        &other.token,
        serde_json::json!({ "price": 0.1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The sweet is unchanged.
    let app = build_test_app(pool);
    let json = body_json(get(app, &format!("/api/sweets/{id}")).await).await;
    assert_eq!(json["price"], 1.2);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_is_admin_only(pool: PgPool) {
    let owner = create_user(&pool, "alice", "user").await;
    let admin = create_user(&pool, "root", "admin").await;
    let id = seed_sweet(&pool, owner.id, "Lemon Drops", "candy", 1.2, 6).await;

    // Even the owner cannot delete.
    let app = build_test_app(pool.clone());
    let forbidden = delete_auth(app, &format!("/api/sweets/{id}"), &owner.token).await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let app = build_test_app(pool.clone());
    let deleted = delete_auth(app, &format!("/api/sweets/{id}"), &admin.token).await;
    assert_eq!(deleted.status(), StatusCode::OK);
    let json = body_json(deleted).await;
    assert_eq!(json["message"], "Sweet deleted successfully");

    let app = build_test_app(pool);
    let gone = get(app, &format!("/api/sweets/{id}")).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_a_nonexistent_id_returns_404_not_500(pool: PgPool) {
    let admin = create_user(&pool, "root", "admin").await;

    let app = build_test_app(pool);
    let response = delete_auth(app, "/api/sweets/99999", &admin.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Sweet not found");
}
