//! Handler for the public contact form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::contact::ContactFormInput;
use portfolio_db::models::contact_submission::CreateContactSubmission;
use portfolio_db::repositories::ContactSubmissionRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// Acknowledgement shown to the visitor after submitting the form.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your inquiry! We'll get back to you soon.";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/contact
///
/// Validate the form and store it as a `new` submission. Nothing is
/// written when validation fails.
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<ContactFormInput>,
) -> AppResult<(StatusCode, Json<ContactResponse>)> {
    let form = input.validate()?;
    let submission =
        ContactSubmissionRepo::create(&state.pool, &CreateContactSubmission::from(form)).await?;

    tracing::info!(
        id = %submission.id,
        inquiry_type = %submission.inquiry_type.as_str(),
        "Contact submission received",
    );

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            message: THANK_YOU_MESSAGE,
        }),
    ))
}
