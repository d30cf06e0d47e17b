//! Import pieces from the legacy JSON data file.

use std::path::Path;

use anyhow::Context;
use portfolio_db::models::piece::PotteryPiece;
use portfolio_db::repositories::PieceRepo;
use portfolio_db::DbPool;
use serde::Deserialize;

/// Top-level shape of the legacy data file. Records stay untyped so one
/// bad record does not sink the rest.
#[derive(Debug, Deserialize)]
struct ImportFile {
    pieces: Vec<serde_json::Value>,
}

/// Outcome of an import run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub failed: usize,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.imported + self.failed
    }
}

/// Parse the data file's contents into raw piece records.
pub fn parse(contents: &str) -> anyhow::Result<Vec<serde_json::Value>> {
    let file: ImportFile =
        serde_json::from_str(contents).context("Import file is not a valid pieces document")?;
    Ok(file.pieces)
}

/// Convert one raw record into a piece.
pub fn to_piece(record: serde_json::Value) -> anyhow::Result<PotteryPiece> {
    serde_json::from_value(record).context("Invalid piece record")
}

/// Label for a record in progress output, even when it fails to convert.
fn record_label(record: &serde_json::Value, index: usize) -> String {
    match record.get("id") {
        Some(serde_json::Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => format!("#{}", index + 1),
    }
}

/// Upsert every piece in `path`. A record that fails to convert or to
/// upsert is reported and skipped.
pub async fn run(pool: &DbPool, path: &Path) -> anyhow::Result<ImportReport> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records = parse(&contents)?;
    println!("Found {} piece(s) in {}", records.len(), path.display());

    let mut report = ImportReport::default();
    for (index, record) in records.into_iter().enumerate() {
        let label = record_label(&record, index);
        let piece = match to_piece(record) {
            Ok(piece) => piece,
            Err(e) => {
                tracing::error!(
                    record = %label,
                    error = %format!("{e:#}"),
                    "Invalid piece record"
                );
                println!("  FAILED    {label}: {e:#}");
                report.failed += 1;
                continue;
            }
        };

        match PieceRepo::upsert_imported(pool, &piece).await {
            Ok(_) => {
                println!("  imported  {} ({})", piece.title, piece.id);
                report.imported += 1;
            }
            Err(e) => {
                tracing::error!(id = %piece.id, error = %e, "Failed to import piece");
                println!("  FAILED    {} ({}): {e}", piece.title, piece.id);
                report.failed += 1;
            }
        }
    }

    println!("Imported {}, failed {}", report.imported, report.failed);
    Ok(report)
}
