//! Admin authentication for Axum handlers.
//!
//! A request is authenticated when it carries a valid admin token, either
//! as `Authorization: Bearer <token>` or in the `token` cookie. The header
//! wins when both are present.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use portfolio_core::error::CoreError;

use crate::auth::cookie::{find_cookie, TOKEN_COOKIE};
use crate::auth::jwt::{validate_token, AdminClaims, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Pick the token out of the `Authorization` and `Cookie` header values.
pub fn extract_token<'a>(
    authorization: Option<&'a str>,
    cookie: Option<&'a str>,
) -> Option<&'a str> {
    // A Bearer header decides on its own, even when its token is empty.
    if let Some(token) = authorization.and_then(|value| value.strip_prefix("Bearer ")) {
        return Some(token.trim());
    }
    cookie
        .and_then(|header| find_cookie(header, TOKEN_COOKIE))
        .filter(|token| !token.is_empty())
}

/// Decode the request's admin claims, if it carries a valid admin token.
pub fn admin_claims(
    authorization: Option<&str>,
    cookie: Option<&str>,
    config: &JwtConfig,
) -> Option<AdminClaims> {
    let token = extract_token(authorization, cookie)?;
    match validate_token(token, config) {
        Ok(claims) if claims.is_admin() => Some(claims),
        Ok(claims) => {
            tracing::debug!(role = %claims.role, "Rejected token without admin role");
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected invalid admin token");
            None
        }
    }
}

/// Whether the request is authenticated as the admin. Never errors.
pub fn is_authenticated(
    authorization: Option<&str>,
    cookie: Option<&str>,
    config: &JwtConfig,
) -> bool {
    admin_claims(authorization, cookie, config).is_some()
}

/// Requires a valid admin token. Rejects with 401 Unauthorized otherwise.
///
/// Place it before any body extractor so an unauthenticated request is
/// refused before its body is read:
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin, AppJson(input): AppJson<Input>) -> AppResult<()> {
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AdminClaims);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let cookie = parts.headers.get(COOKIE).and_then(|v| v.to_str().ok());

        admin_claims(authorization, cookie, &state.config.jwt)
            .map(RequireAdmin)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unauthorized".into())))
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::jwt::generate_admin_token;

    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "middleware-test-secret".into(),
            expiry_days: 7,
        }
    }

    #[test]
    fn bearer_header_wins_over_cookie() {
        assert_eq!(
            extract_token(Some("Bearer from-header"), Some("token=from-cookie")),
            Some("from-header")
        );
    }

    #[test]
    fn cookie_is_used_without_bearer_header() {
        assert_eq!(
            extract_token(None, Some("a=1; token=from-cookie")),
            Some("from-cookie")
        );
        assert_eq!(
            extract_token(Some("Basic dXNlcjpwYXNz"), Some("token=from-cookie")),
            Some("from-cookie")
        );
    }

    #[test]
    fn no_token_anywhere() {
        assert_eq!(extract_token(None, None), None);
        assert_eq!(extract_token(Some("Basic abc"), Some("token=")), None);
        assert_eq!(extract_token(None, Some("mytoken=abc")), None);
    }

    #[test]
    fn valid_token_authenticates_from_either_source() {
        let config = config();
        let token = generate_admin_token(&config).unwrap();

        let header = format!("Bearer {token}");
        assert!(is_authenticated(Some(&header), None, &config));

        let cookie = format!("token={token}");
        assert!(is_authenticated(None, Some(&cookie), &config));
    }

    #[test]
    fn invalid_token_is_not_authenticated() {
        let config = config();
        assert!(!is_authenticated(None, None, &config));
        assert!(!is_authenticated(Some("Bearer garbage"), None, &config));

        let foreign = generate_admin_token(&JwtConfig {
            secret: "someone-else".into(),
            expiry_days: 7,
        })
        .unwrap();
        assert!(!is_authenticated(
            Some(&format!("Bearer {foreign}")),
            None,
            &config
        ));
    }

    #[test]
    fn bad_header_does_not_fall_back_when_bearer_present() {
        let config = config();
        let good = generate_admin_token(&config).unwrap();
        let cookie = format!("token={good}");
        // A Bearer header is authoritative even when its token is invalid.
        assert!(!is_authenticated(Some("Bearer garbage"), Some(&cookie), &config));
    }

    #[test]
    fn empty_bearer_header_does_not_fall_back_to_cookie() {
        let config = config();
        let good = generate_admin_token(&config).unwrap();
        let cookie = format!("token={good}");

        assert_eq!(extract_token(Some("Bearer "), Some(&cookie)), Some(""));
        assert!(!is_authenticated(Some("Bearer "), Some(&cookie), &config));
        assert!(!is_authenticated(Some("Bearer    "), Some(&cookie), &config));
    }
}
