//! Portfolio piece collections, image metadata and upload rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Collection constants
// ---------------------------------------------------------------------------

pub const COLLECTION_VASES: &str = "Vases";
pub const COLLECTION_BOWLS: &str = "Bowls";
pub const COLLECTION_SCULPTURAL: &str = "Sculptural";
pub const COLLECTION_FUNCTIONAL: &str = "Functional";
pub const COLLECTION_DECORATIVE: &str = "Decorative";
pub const COLLECTION_EXPERIMENTAL: &str = "Experimental";
pub const COLLECTION_PORTFOLIO: &str = "Portfolio";

/// All valid collection names, in display order.
///
/// Must match the `chk_pottery_pieces_collection` constraint in the
/// migrations.
pub const VALID_COLLECTIONS: &[&str] = &[
    COLLECTION_VASES,
    COLLECTION_BOWLS,
    COLLECTION_SCULPTURAL,
    COLLECTION_FUNCTIONAL,
    COLLECTION_DECORATIVE,
    COLLECTION_EXPERIMENTAL,
    COLLECTION_PORTFOLIO,
];

/// Fixed categorical tag applied to every piece. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    Vases,
    Bowls,
    Sculptural,
    Functional,
    Decorative,
    Experimental,
    Portfolio,
}

impl Collection {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vases => COLLECTION_VASES,
            Self::Bowls => COLLECTION_BOWLS,
            Self::Sculptural => COLLECTION_SCULPTURAL,
            Self::Functional => COLLECTION_FUNCTIONAL,
            Self::Decorative => COLLECTION_DECORATIVE,
            Self::Experimental => COLLECTION_EXPERIMENTAL,
            Self::Portfolio => COLLECTION_PORTFOLIO,
        }
    }
}

impl FromStr for Collection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            COLLECTION_VASES => Ok(Self::Vases),
            COLLECTION_BOWLS => Ok(Self::Bowls),
            COLLECTION_SCULPTURAL => Ok(Self::Sculptural),
            COLLECTION_FUNCTIONAL => Ok(Self::Functional),
            COLLECTION_DECORATIVE => Ok(Self::Decorative),
            COLLECTION_EXPERIMENTAL => Ok(Self::Experimental),
            COLLECTION_PORTFOLIO => Ok(Self::Portfolio),
            other => Err(CoreError::Validation(format!(
                "Unknown collection: '{other}'. Valid collections: {}",
                VALID_COLLECTIONS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// One CDN-hosted image attached to a piece. Stored inside the piece's
/// `images` JSONB column in the same camelCase shape the API returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceImage {
    pub url: String,
    pub public_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Image file extensions accepted by the upload endpoint and CLI.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "webp", "gif", "avif", "heic"];

/// Whether an uploaded file looks like an image, by MIME type or by
/// file extension when the client sent a generic content type.
pub fn is_supported_image(filename: &str, content_type: Option<&str>) -> bool {
    if content_type.is_some_and(|ct| ct.starts_with("image/")) {
        return true;
    }
    let Some((_, ext)) = filename.rsplit_once('.') else {
        return false;
    };
    SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

// ---------------------------------------------------------------------------
// Placeholder detection
// ---------------------------------------------------------------------------

/// Host used by the stock photos the site was seeded with.
const PLACEHOLDER_IMAGE_HOST: &str = "unsplash.com";

/// A piece is placeholder content when it sits outside the `Portfolio`
/// collection or any of its images is a stock photo.
pub fn is_placeholder(collection: Collection, images: &[PieceImage]) -> bool {
    collection != Collection::Portfolio
        || images
            .iter()
            .any(|img| img.url.contains(PLACEHOLDER_IMAGE_HOST))
}
