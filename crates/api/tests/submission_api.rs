//! HTTP-level tests for admin management of contact submissions.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete, delete_auth, get_auth, patch_json_auth, post_json};
use portfolio_db::repositories::ContactSubmissionRepo;
use sqlx::PgPool;

async fn submit(pool: &PgPool, name: &str) {
    let body = serde_json::json!({
        "name": name,
        "email": format!("{name}@example.com"),
        "inquiryType": "general",
        "message": "Hello, I love your glazes!"
    });
    let response = post_json(common::build_test_app(pool.clone()), "/api/contact", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn list(pool: &PgPool, query: &str) -> serde_json::Value {
    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/submissions{query}"),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_newest_first_in_camel_case(pool: PgPool) {
    submit(&pool, "first").await;
    submit(&pool, "second").await;

    let json = list(&pool, "").await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "second");
    assert_eq!(items[0]["inquiryType"], "general");
    assert_eq!(items[0]["status"], "new");
    assert!(items[0]["createdAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_status_then_filter(pool: PgPool) {
    submit(&pool, "ada").await;
    submit(&pool, "bea").await;
    let id = list(&pool, "").await[1]["id"].as_str().unwrap().to_string();

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/submissions/{id}"),
        serde_json::json!({ "status": "responded" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "responded");
    assert_eq!(updated["name"], "ada");

    let responded = list(&pool, "?status=responded").await;
    assert_eq!(responded.as_array().unwrap().len(), 1);
    assert_eq!(responded[0]["id"], id.as_str());

    let response = get_auth(
        common::build_test_app(pool),
        "/api/admin/submissions?status=done",
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_rejects_bad_status_and_missing_id(pool: PgPool) {
    submit(&pool, "cy").await;
    let id = list(&pool, "").await[0]["id"].as_str().unwrap().to_string();
    let token = admin_token();

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/submissions/{id}"),
        serde_json::json!({ "status": "spam" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/submissions/{id}"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = patch_json_auth(
        common::build_test_app(pool),
        "/api/admin/submissions/no-such-id",
        serde_json::json!({ "status": "read" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_requires_admin_and_reports_missing(pool: PgPool) {
    submit(&pool, "di").await;
    let id = list(&pool, "").await[0]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/admin/submissions/{id}");

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ContactSubmissionRepo::count(&pool).await.unwrap(), 1);

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(ContactSubmissionRepo::count(&pool).await.unwrap(), 0);

    let response = delete_auth(common::build_test_app(pool), &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
