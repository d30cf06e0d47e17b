pub mod auth;
pub mod contact;
pub mod piece;
pub mod submission;
pub mod upload;
