#![allow(dead_code)]

use std::sync::{Arc, LazyLock, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use portfolio_api::auth::jwt::{generate_admin_token, JwtConfig};
use portfolio_api::auth::password::hash_password;
use portfolio_api::config::ServerConfig;
use portfolio_api::router::build_app_router;
use portfolio_api::state::AppState;
use portfolio_cloudinary::{CloudinaryError, ImageFile, ImageStore, UploadOptions, UploadedImage};
use sqlx::PgPool;
use tower::ServiceExt;

/// Plaintext admin password accepted by the test app.
pub const ADMIN_PASSWORD: &str = "admin123";

/// Hashing is slow; do it once per test binary.
static ADMIN_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password(ADMIN_PASSWORD).expect("hashing should succeed"));

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiry_days: 7,
        },
        admin_password_hash: ADMIN_HASH.clone(),
        cookie_secure: false,
        max_upload_bytes: 1024 * 1024,
    }
}

/// In-memory image store that records what it was asked to do.
#[derive(Default)]
pub struct FakeImageStore {
    pub uploads: Mutex<Vec<String>>,
}

#[async_trait]
impl ImageStore for FakeImageStore {
    async fn upload(
        &self,
        file: ImageFile,
        options: &UploadOptions,
    ) -> Result<UploadedImage, CloudinaryError> {
        let folder = options.folder.clone().unwrap_or_else(|| "pottery".into());
        let stem = file.filename.rsplit_once('.').map_or(file.filename.as_str(), |(s, _)| s);
        let public_id = format!("{folder}/{stem}");
        self.uploads.lock().unwrap().push(file.filename.clone());
        Ok(UploadedImage {
            url: format!("https://cdn.test/{public_id}.jpg"),
            public_id,
            width: 800,
            height: 600,
        })
    }

    async fn destroy(&self, _public_id: &str) -> Result<bool, CloudinaryError> {
        Ok(true)
    }

    fn responsive_url(&self, public_id: &str, width: u32) -> String {
        format!("https://cdn.test/w_{width}/{public_id}")
    }
}

/// Build the full application router with the production middleware stack
/// and an in-memory image store.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_store(pool, Arc::new(FakeImageStore::default()))
}

pub fn build_test_app_with_store(pool: PgPool, images: Arc<FakeImageStore>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        images: images as Arc<dyn ImageStore>,
    };
    build_app_router(state, &config)
}

/// A valid admin token for the test config.
pub fn admin_token() -> String {
    generate_admin_token(&test_config().jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    body: &serde_json::Value,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, &body, None)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, &body, Some(token))).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, &body, None)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, &body, Some(token))).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PATCH, uri, &body, Some(token))).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, None)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, Some(token))).await
}

/// Send a raw body with an explicit content type (for malformed JSON and
/// multipart requests).
pub async fn post_raw_auth(
    app: Router,
    uri: &str,
    content_type: &str,
    body: Vec<u8>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid piece body with one image.
pub fn piece_body(title: &str, collection: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "Wheel-thrown stoneware",
        "collection": collection,
        "images": [{
            "url": format!("https://res.cloudinary.com/demo/image/upload/pottery/{title}.jpg"),
            "publicId": format!("pottery/{title}"),
            "width": 1200,
            "height": 900
        }]
    })
}

/// Create a piece through the API and return its JSON.
pub async fn create_piece(pool: &PgPool, title: &str, collection: &str) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/pieces",
        piece_body(title, collection),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
