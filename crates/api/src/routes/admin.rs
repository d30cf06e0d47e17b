//! Route definitions for the `/admin` area. Every handler here takes
//! `RequireAdmin`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::submission;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /submissions         -> list
/// PATCH  /submissions/{id}    -> update_status
/// DELETE /submissions/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submissions", get(submission::list))
        .route(
            "/submissions/{id}",
            patch(submission::update_status).delete(submission::delete),
        )
}
