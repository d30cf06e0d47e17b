//! Route definitions for the `/pieces` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::piece;
use crate::state::AppState;

/// Routes mounted at `/pieces`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(piece::list).post(piece::create))
        .route(
            "/{id}",
            get(piece::get_by_id)
                .put(piece::update)
                .delete(piece::delete),
        )
}
