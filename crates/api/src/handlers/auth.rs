//! Handlers for the `/auth` resource (login, logout).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{cleared_cookie, session_cookie};
use crate::auth::jwt::generate_admin_token;
use crate::auth::password::verify_admin_password;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: Option<String>,
}

/// Successful login response. The same token is also set as a cookie.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/auth/login
///
/// Check the password against the configured admin hash and issue a token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let password = input
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("Password is required".into()))?;

    if !verify_admin_password(&password, &state.config.admin_password_hash) {
        tracing::warn!("Admin login failed");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let jwt = &state.config.jwt;
    let token = generate_admin_token(jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let cookie = session_cookie(&token, jwt.expiry_secs(), state.config.cookie_secure);

    tracing::info!("Admin logged in");
    Ok(([(SET_COOKIE, cookie)], Json(LoginResponse { token })))
}

/// POST /api/auth/logout
///
/// Clear the token cookie. Tokens are stateless, so a copy held elsewhere
/// stays valid until it expires.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, cleared_cookie(state.config.cookie_secure))],
    )
}
