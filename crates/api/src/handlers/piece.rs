//! Handlers for the `/pieces` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::pottery::Collection;
use portfolio_core::types::RecordId;
use portfolio_db::models::piece::{CreatePiece, PieceFilter, PotteryPiece, UpdatePiece};
use portfolio_db::repositories::PieceRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

const ENTITY: &str = "PotteryPiece";

/// Query parameters for `GET /pieces`. Both filters are optional and combine.
#[derive(Debug, Default, Deserialize)]
pub struct PieceListParams {
    pub collection: Option<String>,
    pub featured: Option<String>,
}

impl PieceListParams {
    /// Parse into a typed filter. Empty values mean "no filter"; an unknown
    /// collection or a non-boolean `featured` is a validation error.
    pub fn into_filter(self) -> Result<PieceFilter, CoreError> {
        let collection = self
            .collection
            .filter(|c| !c.is_empty())
            .map(|c| c.parse::<Collection>())
            .transpose()?;

        let featured = match self.featured.as_deref() {
            None | Some("") => None,
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(other) => {
                return Err(CoreError::Validation(format!(
                    "Invalid featured filter: '{other}'. Expected true or false"
                )))
            }
        };

        Ok(PieceFilter {
            collection,
            featured,
        })
    }
}

/// GET /api/pieces
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PieceListParams>,
) -> AppResult<Json<Vec<PotteryPiece>>> {
    let filter = params.into_filter()?;
    let pieces = PieceRepo::list(&state.pool, &filter).await?;
    Ok(Json(pieces))
}

/// POST /api/pieces
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppJson(input): AppJson<CreatePiece>,
) -> AppResult<(StatusCode, Json<PotteryPiece>)> {
    let input = input.normalized()?;
    let piece = PieceRepo::create(&state.pool, &input).await?;
    tracing::info!(id = %piece.id, collection = %piece.collection, "Piece created");
    Ok((StatusCode::CREATED, Json(piece)))
}

/// GET /api/pieces/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<RecordId>,
) -> AppResult<Json<PotteryPiece>> {
    let piece = PieceRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(piece))
}

/// PUT /api/pieces/{id}
///
/// Partial update: omitted fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<RecordId>,
    AppJson(input): AppJson<UpdatePiece>,
) -> AppResult<Json<PotteryPiece>> {
    let input = input.normalized()?;
    if input.is_empty() {
        tracing::debug!(%id, "Update carries no fields; only updatedAt changes");
    }
    let piece = PieceRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::info!(id = %piece.id, "Piece updated");
    Ok(Json(piece))
}

/// DELETE /api/pieces/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<RecordId>,
) -> AppResult<StatusCode> {
    if PieceRepo::delete(&state.pool, &id).await? {
        tracing::info!(%id, "Piece deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }
}
