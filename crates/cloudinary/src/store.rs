//! The image storage seam used by the API server and CLI.

use async_trait::async_trait;
use portfolio_core::pottery::PieceImage;
use serde::{Deserialize, Serialize};

use crate::client::CloudinaryError;

/// An image file received from a client or read from disk.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Per-upload overrides. Unset fields fall back to the store's defaults.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub folder: Option<String>,
    pub public_id: Option<String>,
    pub overwrite: bool,
}

/// Result of a successful upload, in the shape returned by `POST /api/upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
    pub width: u32,
    pub height: u32,
}

impl From<UploadedImage> for PieceImage {
    fn from(image: UploadedImage) -> Self {
        Self {
            url: image.url,
            public_id: image.public_id,
            width: Some(image.width),
            height: Some(image.height),
        }
    }
}

/// Remote image storage with CDN delivery.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Upload an image and return where it is served from.
    async fn upload(
        &self,
        file: ImageFile,
        options: &UploadOptions,
    ) -> Result<UploadedImage, CloudinaryError>;

    /// Delete an image. Returns `true` if the store removed it.
    async fn destroy(&self, public_id: &str) -> Result<bool, CloudinaryError>;

    /// Delivery URL for `public_id`, width-limited and auto-formatted.
    fn responsive_url(&self, public_id: &str, width: u32) -> String;
}
