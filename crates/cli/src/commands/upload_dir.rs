//! Bulk upload a directory of images, one new piece per file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use portfolio_cloudinary::{ImageFile, ImageStore, UploadOptions};
use portfolio_core::pottery::{is_supported_image, Collection};
use portfolio_db::models::piece::CreatePiece;
use portfolio_db::repositories::PieceRepo;
use portfolio_db::DbPool;

#[derive(Debug, Clone)]
pub struct UploadDirOptions {
    pub folder: Option<String>,
    pub collection: Collection,
    /// File stems whose pieces are created as featured.
    pub featured: Vec<String>,
}

/// Image files directly inside `dir`, sorted by file name.
pub fn collect_images(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_file() && !name.starts_with('.') && is_supported_image(name, None) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Human title from a file stem: `galaxy-glaze_bowl` becomes `Galaxy Glaze Bowl`.
pub fn title_from_stem(stem: &str) -> String {
    stem.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// MIME type for a supported image extension.
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    Some(match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "avif" => "image/avif",
        "heic" => "image/heic",
        _ => return None,
    })
}

/// Upload each image in `dir` and create a piece for it. Stops at the first
/// failure; pieces already created stay.
pub async fn run(
    pool: &DbPool,
    images: &dyn ImageStore,
    dir: &Path,
    options: &UploadDirOptions,
) -> anyhow::Result<()> {
    let files = collect_images(dir)?;
    if files.is_empty() {
        anyhow::bail!("No images found in {}", dir.display());
    }
    println!("Uploading {} image(s) from {}", files.len(), dir.display());

    for path in &files {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .context("Image file name is not valid UTF-8")?
            .to_string();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(filename.as_str())
            .to_string();

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file = ImageFile {
            filename: filename.clone(),
            content_type: content_type_for(path).map(str::to_string),
            bytes,
        };
        let upload_options = UploadOptions {
            folder: options.folder.clone(),
            public_id: Some(stem.clone()),
            overwrite: true,
        };

        let uploaded = images
            .upload(file, &upload_options)
            .await
            .with_context(|| format!("Failed to upload {filename}"))?;

        let input = CreatePiece {
            title: title_from_stem(&stem),
            description: None,
            collection: options.collection,
            images: vec![uploaded.into()],
            featured: Some(options.featured.contains(&stem)),
        }
        .normalized()?;
        let piece = PieceRepo::create(pool, &input).await?;

        println!("  {filename} -> {} ({})", piece.title, piece.id);
    }

    Ok(())
}
