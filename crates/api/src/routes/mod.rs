pub mod admin;
pub mod auth;
pub mod contact;
pub mod health;
pub mod piece;
pub mod upload;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                    login (public)
/// /auth/logout                   logout (public)
///
/// /pieces                        list (public), create (admin)
/// /pieces/{id}                   get (public), update, delete (admin)
///
/// /upload                        image upload (admin)
///
/// /contact                       contact form (public)
///
/// /admin/submissions             list (admin)
/// /admin/submissions/{id}        update status, delete (admin)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/pieces", piece::router())
        .nest("/upload", upload::router(config.max_upload_bytes))
        .nest("/contact", contact::router())
        .nest("/admin", admin::router())
}
