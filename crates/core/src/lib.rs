//! Domain types and pure validation logic for the pottery portfolio.
//!
//! Nothing in this crate touches the network or the database; the `db`,
//! `cloudinary` and `api` crates build on these types.

pub mod contact;
pub mod error;
pub mod pottery;
pub mod types;
