//! Pottery piece model, row mapping and DTOs.

use portfolio_core::error::CoreError;
use portfolio_core::pottery::{Collection, PieceImage};
use portfolio_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A portfolio piece as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotteryPiece {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub collection: Collection,
    pub images: Vec<PieceImage>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `pottery_pieces` table.
#[derive(Debug, Clone, FromRow)]
pub struct PieceRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub collection: String,
    pub images: Json<Vec<PieceImage>>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<PieceRow> for PotteryPiece {
    type Error = CoreError;

    fn try_from(row: PieceRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            title: row.title,
            description: row.description,
            collection: row.collection.parse()?,
            images: row.images.0,
            featured: row.featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// DTO for creating a new piece.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePiece {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    pub description: Option<String>,
    pub collection: Collection,
    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Vec<PieceImage>,
    /// Defaults to `false` if omitted.
    pub featured: Option<bool>,
}

/// DTO for a partial update. Omitted fields keep their stored values;
/// `id` and timestamps are not part of the shape and are ignored if sent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePiece {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub collection: Option<Collection>,
    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Option<Vec<PieceImage>>,
    pub featured: Option<bool>,
}

impl CreatePiece {
    /// Trim the text fields and validate. A blank description becomes `None`.
    pub fn normalized(mut self) -> Result<Self, CoreError> {
        self.title = self.title.trim().to_string();
        self.description = normalize_description(self.description);
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(self)
    }
}

impl UpdatePiece {
    /// Trim the text fields and validate the ones that are present.
    pub fn normalized(mut self) -> Result<Self, CoreError> {
        self.title = self.title.map(|t| t.trim().to_string());
        self.description = self.description.map(|d| d.trim().to_string());
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(self)
    }

    /// Whether the payload carries no field to change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.collection.is_none()
            && self.images.is_none()
            && self.featured.is_none()
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Optional filters for listing pieces. Both may be combined.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceFilter {
    pub collection: Option<Collection>,
    pub featured: Option<bool>,
}
