//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing and verification of the admin password.
//! - [`jwt`] -- admin token generation and validation.
//! - [`cookie`] -- the `token` cookie set on login and cleared on logout.

pub mod cookie;
pub mod jwt;
pub mod password;
