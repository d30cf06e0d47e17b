//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod contact_submission_repo;
pub mod piece_repo;

pub use contact_submission_repo::ContactSubmissionRepo;
pub use piece_repo::PieceRepo;
