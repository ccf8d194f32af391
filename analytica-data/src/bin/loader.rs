use std::fs::File;
use std::path::{Path, PathBuf};

use analytica_data::StateRecordLoader;
use analytica_db_sqlite::SqliteStateRepository;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Load state statistics from a CSV or JSON file into the database.
///
/// CSV files need a header row with the record field names (`Name`,
/// `MedianHomePrice`, `IncomeTax`, `SalesTax`, ...). JSON files hold either
/// an array of records or a `{ "data": [...] }` envelope. The format is
/// chosen by file extension.
#[derive(Parser, Debug)]
#[command(name = "analytica-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV or JSON file containing state records
    #[arg(short, long)]
    file: PathBuf,

    /// SQLite database URL (e.g., sqlite:states.db?mode=rwc to create if missing)
    #[arg(short, long, default_value = "sqlite:states.db?mode=rwc")]
    database: String,

    /// Run database migrations before loading data
    #[arg(short, long, default_value_t = false)]
    migrate: bool,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .without_time()
        .with_target(false)
        .init();

    let args = Args::parse();

    let repo = SqliteStateRepository::new(&args.database)
        .await
        .with_context(|| format!("Failed to connect to database: {}", args.database))?;

    if args.migrate {
        println!("Running migrations...");
        repo.run_migrations()
            .await
            .context("Failed to run migrations")?;
        println!("Migrations complete.");
    }

    println!("Loading states from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = if is_json(&args.file) {
        StateRecordLoader::parse_json(file)
            .with_context(|| format!("Failed to parse JSON: {}", args.file.display()))?
    } else {
        StateRecordLoader::parse_csv(file)
            .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?
    };

    println!("Parsed {} records", records.len());

    let summary = StateRecordLoader::load(&repo, records)
        .await
        .context("Failed to load states into database")?;

    println!(
        "Successfully loaded {} states into the database ({} field warnings).",
        summary.loaded,
        summary.warnings.len()
    );

    Ok(())
}
