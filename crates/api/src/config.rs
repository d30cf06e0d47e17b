use crate::auth::jwt::JwtConfig;

/// Default request body limit for image uploads (10 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// Read once at startup. Every field except the secrets has a default
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT signing secret and token lifetime.
    pub jwt: JwtConfig,
    /// Argon2 PHC hash of the single admin password.
    pub admin_password_hash: String,
    /// Whether the auth cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
    /// Maximum accepted request body size for `POST /api/upload`.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                |
    /// |------------------------|----------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                              |
    /// | `PORT`                 | `3000`                                 |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                   |
    /// | `ADMIN_PASSWORD_HASH`  | required                               |
    /// | `COOKIE_SECURE`        | `true` if `APP_ENV=production`         |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                             |
    ///
    /// JWT settings come from [`JwtConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics on a missing admin password hash or any unparsable value.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_password_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .expect("ADMIN_PASSWORD_HASH must be set (generate one with `portfolio hash-password`)");
        assert!(
            !admin_password_hash.trim().is_empty(),
            "ADMIN_PASSWORD_HASH must not be empty"
        );

        let is_production = std::env::var("APP_ENV").is_ok_and(|env| env == "production");
        let cookie_secure = match std::env::var("COOKIE_SECURE") {
            Ok(value) => value.parse().expect("COOKIE_SECURE must be true or false"),
            Err(_) => is_production,
        };

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            admin_password_hash: admin_password_hash.trim().to_string(),
            cookie_secure,
            max_upload_bytes,
        }
    }
}
