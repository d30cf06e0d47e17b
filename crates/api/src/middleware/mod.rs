//! Request extractors that guard admin-only routes.

pub mod auth;
