//! REST client for the Cloudinary upload API.
//!
//! Wraps the signed `image/upload` and `image/destroy` endpoints using
//! [`reqwest`], and builds delivery URLs for the CDN.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::CloudinaryConfig;
use crate::signature;
use crate::store::{ImageFile, ImageStore, UploadOptions, UploadedImage};

/// Incoming transformation applied to every upload: cap the width at
/// 2000px and let Cloudinary pick the quality.
pub const UPLOAD_TRANSFORMATION: &str = "c_limit,w_2000/q_auto";

/// HTTP request timeout for a single API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors from the Cloudinary REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum CloudinaryError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Cloudinary returned a non-2xx status code.
    #[error("Cloudinary API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body, or the raw body.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected Cloudinary response: {0}")]
    Decode(String),
}

/// Successful `image/upload` response (only the fields we use).
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    width: u32,
    height: u32,
}

/// `image/destroy` response.
#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

/// Error envelope Cloudinary uses for 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// HTTP client for one Cloudinary account.
pub struct CloudinaryClient {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    /// Create a client with its own connection pool.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialised.
    pub fn new(config: CloudinaryConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Account configuration this client signs requests with.
    pub fn config(&self) -> &CloudinaryConfig {
        &self.config
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/{}/image/{action}",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    /// Sign `params`, then attach the signature, API key and timestamp.
    fn signed_form(&self, mut params: BTreeMap<&'static str, String>) -> Form {
        params.insert("timestamp", chrono::Utc::now().timestamp().to_string());
        let signature = signature::sign(&params, &self.config.api_secret);

        let mut form = Form::new();
        for (name, value) in params {
            if !value.is_empty() {
                form = form.text(name, value);
            }
        }
        form.text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
    }

    /// Upload an image file into `options.folder` (or the default folder).
    pub async fn upload(
        &self,
        file: ImageFile,
        options: &UploadOptions,
    ) -> Result<UploadedImage, CloudinaryError> {
        let folder = options
            .folder
            .clone()
            .unwrap_or_else(|| self.config.folder.clone());

        let mut params = BTreeMap::from([
            ("folder", folder),
            ("transformation", UPLOAD_TRANSFORMATION.to_string()),
        ]);
        if let Some(public_id) = &options.public_id {
            params.insert("public_id", public_id.clone());
        }
        if options.overwrite {
            params.insert("overwrite", "true".to_string());
        }

        let size = file.bytes.len();
        let mut part = Part::bytes(file.bytes).file_name(file.filename.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type)?;
        }
        let form = self.signed_form(params).part("file", part);

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;
        let uploaded: UploadResponse = Self::parse_response(response).await?;

        tracing::info!(
            public_id = %uploaded.public_id,
            filename = %file.filename,
            bytes = size,
            width = uploaded.width,
            height = uploaded.height,
            "Uploaded image to Cloudinary",
        );

        Ok(UploadedImage {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
            width: uploaded.width,
            height: uploaded.height,
        })
    }

    /// Delete an uploaded image. Returns `true` when Cloudinary reports `ok`
    /// and `false` when the image did not exist.
    pub async fn destroy(&self, public_id: &str) -> Result<bool, CloudinaryError> {
        let params = BTreeMap::from([("public_id", public_id.to_string())]);
        let response = self
            .client
            .post(self.endpoint("destroy"))
            .multipart(self.signed_form(params))
            .send()
            .await?;
        let destroyed: DestroyResponse = Self::parse_response(response).await?;
        tracing::info!(public_id, result = %destroyed.result, "Destroyed Cloudinary image");
        Ok(destroyed.result == "ok")
    }

    /// Delivery URL for `public_id`, limited to `width` pixels with
    /// automatic quality and format selection.
    pub fn responsive_url(&self, public_id: &str, width: u32) -> String {
        format!(
            "{}/{}/image/upload/c_limit,f_auto,q_auto,w_{width}/{public_id}",
            self.config.delivery_base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    // ---- private helpers ----

    /// Decode a JSON body on success, or turn an error status into
    /// [`CloudinaryError::Api`] carrying Cloudinary's message.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CloudinaryError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CloudinaryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| CloudinaryError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ImageStore for CloudinaryClient {
    async fn upload(
        &self,
        file: ImageFile,
        options: &UploadOptions,
    ) -> Result<UploadedImage, CloudinaryError> {
        CloudinaryClient::upload(self, file, options).await
    }

    async fn destroy(&self, public_id: &str) -> Result<bool, CloudinaryError> {
        CloudinaryClient::destroy(self, public_id).await
    }

    fn responsive_url(&self, public_id: &str, width: u32) -> String {
        CloudinaryClient::responsive_url(self, public_id, width)
    }
}
