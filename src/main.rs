//! Shelfmark - Library Catalog Manager
//!
//! Interactive single-session catalog manager for books, students, and
//! checkouts, backed by flat text files.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfmark::{cli, config::AppConfig};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = cli::Cli::parse();

    // Load configuration
    let mut config = AppConfig::load(args.config_dir.as_deref())?;

    // --data-dir relocates both persisted files, keeping their names
    if let Some(dir) = args.data_dir {
        if let Some(name) = config.storage.books_file.file_name().map(ToOwned::to_owned) {
            config.storage.books_file = dir.join(name);
        }
        if let Some(name) = config.storage.students_file.file_name().map(ToOwned::to_owned) {
            config.storage.students_file = dir.join(name);
        }
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("shelfmark={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Shelfmark v{}", env!("CARGO_PKG_VERSION"));

    cli::run(&config)?;

    Ok(())
}
