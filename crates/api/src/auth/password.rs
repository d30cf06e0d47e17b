//! Argon2id password hashing and verification.
//!
//! The admin password is configured as a PHC-formatted hash so the salt and
//! algorithm parameters travel with it.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Check a login attempt against the configured admin hash.
///
/// A malformed hash is a configuration problem, not a wrong password: it is
/// logged and the attempt is refused.
pub fn verify_admin_password(password: &str, admin_hash: &str) -> bool {
    match verify_password(password, admin_hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!(error = %e, "Configured admin password hash is unusable");
            false
        }
    }
}
