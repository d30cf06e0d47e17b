//! `portfolio` -- operator commands for the pottery portfolio.
//!
//! Applies migrations, imports legacy JSON data, cleans out placeholder
//! pieces, bulk-uploads images and produces the admin password hash.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use portfolio_cloudinary::{CloudinaryClient, CloudinaryConfig, ImageStore};
use portfolio_core::pottery::Collection;
use portfolio_db::DbPool;

#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Postgres connection string.
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Log filter, e.g. `portfolio=debug`.
    #[arg(long, global = true, env = "RUST_LOG", default_value = "portfolio=info,warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply pending database migrations.
    Migrate,

    /// Print record counts and the most recent pieces.
    Verify,

    /// Upsert every piece from a `{ "pieces": [...] }` JSON file, keeping ids
    /// and timestamps.
    ImportJson {
        /// Path to the JSON file.
        path: PathBuf,
    },

    /// Delete pieces outside the Portfolio collection or using stock photos.
    RemovePlaceholders {
        /// List what would be removed without deleting anything.
        #[arg(long)]
        dry_run: bool,

        /// Also destroy the removed pieces' images on the CDN.
        #[arg(long)]
        purge_images: bool,
    },

    /// Upload every image in a directory and create one piece per file.
    UploadDir {
        /// Directory to read images from (not recursive).
        dir: PathBuf,

        /// CDN folder; defaults to `CLOUDINARY_FOLDER`.
        #[arg(long)]
        folder: Option<String>,

        /// Collection for the created pieces.
        #[arg(long, default_value = "Portfolio", value_parser = parse_collection)]
        collection: Collection,

        /// File stems (names without extension) to mark as featured.
        #[arg(long, num_args = 1..)]
        featured: Vec<String>,
    },

    /// Print an Argon2id PHC hash suitable for `ADMIN_PASSWORD_HASH`.
    HashPassword {
        /// The plaintext admin password.
        password: String,
    },
}

fn parse_collection(value: &str) -> Result<Collection, String> {
    value.parse().map_err(|e: portfolio_core::error::CoreError| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log.as_str())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::HashPassword { password } => {
            let hash = portfolio_api::auth::password::hash_password(&password)
                .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;
            println!("{hash}");
        }
        Command::Migrate => {
            let pool = connect(cli.database_url.as_deref()).await?;
            portfolio_db::run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
            println!("Migrations applied");
        }
        Command::Verify => {
            let pool = connect(cli.database_url.as_deref()).await?;
            commands::verify::run(&pool).await?;
        }
        Command::ImportJson { path } => {
            let pool = connect(cli.database_url.as_deref()).await?;
            let report = commands::import::run(&pool, &path).await?;
            if report.failed > 0 {
                anyhow::bail!("{} of {} pieces failed to import", report.failed, report.total());
            }
        }
        Command::RemovePlaceholders {
            dry_run,
            purge_images,
        } => {
            let pool = connect(cli.database_url.as_deref()).await?;
            let images = purge_images.then(|| CloudinaryClient::new(CloudinaryConfig::from_env()));
            let store = images.as_ref().map(|c| c as &dyn ImageStore);
            commands::placeholders::run(&pool, store, dry_run).await?;
        }
        Command::UploadDir {
            dir,
            folder,
            collection,
            featured,
        } => {
            let pool = connect(cli.database_url.as_deref()).await?;
            let images = CloudinaryClient::new(CloudinaryConfig::from_env());
            let options = commands::upload_dir::UploadDirOptions {
                folder,
                collection,
                featured,
            };
            commands::upload_dir::run(&pool, &images, &dir, &options).await?;
        }
    }

    Ok(())
}

async fn connect(database_url: Option<&str>) -> anyhow::Result<DbPool> {
    let url = database_url.context("DATABASE_URL must be set (or pass --database-url)")?;
    let pool = portfolio_db::create_pool(url)
        .await
        .context("Failed to connect to database")?;
    tracing::debug!("Database connection pool created");
    Ok(pool)
}
