//! Repository for the `pottery_pieces` table.

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::map_row;
use crate::models::piece::{CreatePiece, PieceFilter, PieceRow, PotteryPiece, UpdatePiece};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, collection, images, featured, created_at, updated_at";

/// Provides CRUD operations for portfolio pieces.
pub struct PieceRepo;

impl PieceRepo {
    /// Insert a new piece with a freshly generated id, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePiece) -> Result<PotteryPiece, sqlx::Error> {
        let query = format!(
            "INSERT INTO pottery_pieces (id, title, description, collection, images, featured)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PieceRow>(&query)
            .bind(Uuid::now_v7().to_string())
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.collection.as_str())
            .bind(Json(&input.images))
            .bind(input.featured.unwrap_or(false))
            .fetch_one(pool)
            .await?;
        map_row::<_, PotteryPiece>(row)
    }

    /// Find a piece by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<PotteryPiece>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pottery_pieces WHERE id = $1");
        sqlx::query_as::<_, PieceRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(map_row::<_, PotteryPiece>)
            .transpose()
    }

    /// List pieces, newest first, narrowed by whichever filters are set.
    pub async fn list(pool: &PgPool, filter: &PieceFilter) -> Result<Vec<PotteryPiece>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pottery_pieces
             WHERE ($1::TEXT IS NULL OR collection = $1)
               AND ($2::BOOLEAN IS NULL OR featured = $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, PieceRow>(&query)
            .bind(filter.collection.map(|c| c.as_str()))
            .bind(filter.featured)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(map_row::<_, PotteryPiece>)
            .collect()
    }

    /// Update a piece. Only non-`None` fields in `input` are applied.
    ///
    /// `updated_at` always moves forward, even when two updates land within
    /// the same clock tick. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdatePiece,
    ) -> Result<Option<PotteryPiece>, sqlx::Error> {
        let query = format!(
            "UPDATE pottery_pieces SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                collection = COALESCE($4, collection),
                images = COALESCE($5, images),
                featured = COALESCE($6, featured),
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PieceRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.collection.map(|c| c.as_str()))
            .bind(input.images.as_ref().map(Json))
            .bind(input.featured)
            .fetch_optional(pool)
            .await?
            .map(map_row::<_, PotteryPiece>)
            .transpose()
    }

    /// Permanently delete a piece by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pottery_pieces WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert or overwrite a piece keeping its existing id and timestamps.
    ///
    /// Used by the bulk JSON import, where records already carry ids from
    /// the file-backed store they came from.
    pub async fn upsert_imported(
        pool: &PgPool,
        piece: &PotteryPiece,
    ) -> Result<PotteryPiece, sqlx::Error> {
        let query = format!(
            "INSERT INTO pottery_pieces
                (id, title, description, collection, images, featured, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                collection = EXCLUDED.collection,
                images = EXCLUDED.images,
                featured = EXCLUDED.featured,
                updated_at = EXCLUDED.updated_at
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PieceRow>(&query)
            .bind(&piece.id)
            .bind(&piece.title)
            .bind(&piece.description)
            .bind(piece.collection.as_str())
            .bind(Json(&piece.images))
            .bind(piece.featured)
            .bind(piece.created_at)
            .bind(piece.updated_at)
            .fetch_one(pool)
            .await?;
        map_row::<_, PotteryPiece>(row)
    }

    /// Total number of pieces.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pottery_pieces")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
