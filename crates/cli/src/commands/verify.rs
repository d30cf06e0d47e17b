use portfolio_db::models::piece::PieceFilter;
use portfolio_db::repositories::{ContactSubmissionRepo, PieceRepo};
use portfolio_db::DbPool;

/// How many pieces to list after the counts.
const SAMPLE_SIZE: usize = 10;

/// Print record counts and the newest pieces.
pub async fn run(pool: &DbPool) -> anyhow::Result<()> {
    portfolio_db::health_check(pool).await?;

    let pieces = PieceRepo::count(pool).await?;
    let submissions = ContactSubmissionRepo::count(pool).await?;
    println!("Pottery pieces:      {pieces}");
    println!("Contact submissions: {submissions}");

    let newest = PieceRepo::list(pool, &PieceFilter::default()).await?;
    if !newest.is_empty() {
        println!();
        for (index, piece) in newest.iter().take(SAMPLE_SIZE).enumerate() {
            let star = if piece.featured { "*" } else { " " };
            println!(
                "{:>3}. {star} {} ({}, {} image(s))",
                index + 1,
                piece.title,
                piece.collection,
                piece.images.len()
            );
        }
    }

    Ok(())
}
