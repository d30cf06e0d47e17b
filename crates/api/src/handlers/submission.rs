//! Admin handlers for contact submissions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::contact::SubmissionStatus;
use portfolio_core::error::CoreError;
use portfolio_core::types::RecordId;
use portfolio_db::models::contact_submission::ContactSubmission;
use portfolio_db::repositories::ContactSubmissionRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

const ENTITY: &str = "ContactSubmission";

/// Query parameters for `GET /admin/submissions`.
#[derive(Debug, Deserialize)]
pub struct SubmissionListParams {
    pub status: Option<String>,
}

/// Request body for `PATCH /admin/submissions/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// GET /api/admin/submissions
pub async fn list(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppQuery(params): AppQuery<SubmissionListParams>,
) -> AppResult<Json<Vec<ContactSubmission>>> {
    let status = params
        .status
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<SubmissionStatus>())
        .transpose()?;
    let submissions = ContactSubmissionRepo::list(&state.pool, status).await?;
    Ok(Json(submissions))
}

/// PATCH /api/admin/submissions/{id}
///
/// Any status may follow any other.
pub async fn update_status(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<RecordId>,
    AppJson(input): AppJson<UpdateStatusRequest>,
) -> AppResult<Json<ContactSubmission>> {
    let status: SubmissionStatus = input
        .status
        .ok_or_else(|| CoreError::Validation("Status is required".into()))?
        .parse()?;

    let submission = ContactSubmissionRepo::update_status(&state.pool, &id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::info!(id = %submission.id, %status, "Submission status updated");
    Ok(Json(submission))
}

/// DELETE /api/admin/submissions/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<RecordId>,
) -> AppResult<StatusCode> {
    if ContactSubmissionRepo::delete(&state.pool, &id).await? {
        tracing::info!(%id, "Submission deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }
}
