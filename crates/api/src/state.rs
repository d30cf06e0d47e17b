use std::sync::Arc;

use portfolio_cloudinary::ImageStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and everything else sits
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: portfolio_db::DbPool,
    /// Server configuration, including the admin credential and JWT secret.
    pub config: Arc<ServerConfig>,
    /// Image CDN used by the upload endpoint.
    pub images: Arc<dyn ImageStore>,
}
