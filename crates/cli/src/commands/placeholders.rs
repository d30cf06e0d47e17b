//! Remove the stock-photo pieces the site was seeded with.

use portfolio_cloudinary::ImageStore;
use portfolio_core::pottery::is_placeholder;
use portfolio_db::models::piece::{PieceFilter, PotteryPiece};
use portfolio_db::repositories::PieceRepo;
use portfolio_db::DbPool;

/// Pieces that count as placeholder content.
pub fn find_placeholders(pieces: &[PotteryPiece]) -> Vec<&PotteryPiece> {
    pieces
        .iter()
        .filter(|p| is_placeholder(p.collection, &p.images))
        .collect()
}

/// Delete placeholder pieces, optionally destroying their CDN images.
pub async fn run(
    pool: &DbPool,
    images: Option<&dyn ImageStore>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let pieces = PieceRepo::list(pool, &PieceFilter::default()).await?;
    let placeholders = find_placeholders(&pieces);
    println!(
        "Found {} placeholder(s) among {} piece(s)",
        placeholders.len(),
        pieces.len()
    );

    for piece in &placeholders {
        println!("  - {} ({})", piece.title, piece.collection);
    }
    if dry_run || placeholders.is_empty() {
        return Ok(());
    }

    let (mut deleted, mut failed) = (0usize, 0usize);
    for piece in placeholders {
        match PieceRepo::delete(pool, &piece.id).await {
            Ok(true) => deleted += 1,
            Ok(false) => tracing::warn!(id = %piece.id, "Piece vanished before deletion"),
            Err(e) => {
                tracing::error!(id = %piece.id, error = %e, "Failed to delete piece");
                failed += 1;
                continue;
            }
        }

        let Some(store) = images else { continue };
        for image in &piece.images {
            // Stock photos were never on the CDN.
            if image.public_id.is_empty() || image.url.contains("unsplash.com") {
                continue;
            }
            if let Err(e) = store.destroy(&image.public_id).await {
                tracing::warn!(public_id = %image.public_id, error = %e, "Failed to destroy image");
            }
        }
    }

    println!("Deleted {deleted}, failed {failed}");
    if failed > 0 {
        anyhow::bail!("{failed} placeholder(s) could not be deleted");
    }
    Ok(())
}
