//! Admin image upload, proxied to the image CDN.

use axum::extract::{Multipart, State};
use axum::Json;
use portfolio_cloudinary::{ImageFile, UploadOptions, UploadedImage};
use portfolio_core::pottery::{is_supported_image, SUPPORTED_IMAGE_EXTENSIONS};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// POST /api/upload
///
/// Accepts a multipart form with a required `file` field. The image is
/// sent to the CDN as-is and the hosted URL and dimensions are returned.
pub async fn upload_image(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    mut multipart: Multipart,
) -> AppResult<Json<UploadedImage>> {
    let mut file: Option<ImageFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue; // ignore unknown fields
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        file = Some(ImageFile {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let file = file.ok_or_else(|| AppError::BadRequest("No file provided".into()))?;

    if file.bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    if !is_supported_image(&file.filename, file.content_type.as_deref()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported file type. Upload an image ({})",
            SUPPORTED_IMAGE_EXTENSIONS.join(", ")
        )));
    }

    let uploaded = state.images.upload(file, &UploadOptions::default()).await?;
    Ok(Json(uploaded))
}
