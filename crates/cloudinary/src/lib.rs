//! Cloudinary image CDN client.
//!
//! - [`config`] -- account credentials and endpoints loaded from the environment.
//! - [`signature`] -- request signing for the authenticated upload API.
//! - [`client`] -- [`CloudinaryClient`], the REST client (upload, destroy, URLs).
//! - [`store`] -- the [`ImageStore`] trait the API server depends on.

pub mod client;
pub mod config;
pub mod signature;
pub mod store;

pub use client::{CloudinaryClient, CloudinaryError};
pub use config::CloudinaryConfig;
pub use store::{ImageFile, ImageStore, UploadOptions, UploadedImage};
