//! # docdex CLI
//!
//! The `docdex` binary drives the ingestion-and-enrichment pipeline.
//!
//! ## Usage
//!
//! ```bash
//! docdex --config ./config/docdex.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `docdex init` | Create the SQLite database and schema |
//! | `docdex ingest [FOLDER]` | Ingest and enrich documents from a folder |
//! | `docdex extract [FOLDER]` | Extract raw text only, persisting nothing |
//! | `docdex get <FILE_NAME>` | Print every stored record for a file name |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use docdex::{config, ingest, logging, migrate, store};

/// docdex — a concurrent document ingestion and enrichment pipeline.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file holding the store path and the ingest settings (folder, suffix,
/// pool size, summary length).
#[derive(Parser)]
#[command(
    name = "docdex",
    about = "docdex — a concurrent document ingestion and enrichment pipeline",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/docdex.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and the documents table. This
    /// command is idempotent — running it multiple times is safe.
    Init,

    /// Ingest and enrich documents from a folder.
    ///
    /// Scans the folder (non-recursive) for files matching the configured
    /// suffix, extracts their text, computes a summary and keyword list
    /// per file, and stores a metadata record for each. Per-file failures
    /// are reported and never stop the batch.
    Ingest {
        /// Folder to scan. Defaults to `ingest.folder` from the config.
        folder: Option<PathBuf>,

        /// Maximum number of files to process.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Extract raw text from documents without persisting anything.
    ///
    /// Runs the same discovery and extraction as `ingest` and reports how
    /// much text each file yields. Useful for checking a folder before a
    /// full ingest run.
    Extract {
        /// Folder to scan. Defaults to `ingest.folder` from the config.
        folder: Option<PathBuf>,
    },

    /// Print every stored record matching a file name.
    ///
    /// Repeat ingestion creates duplicate records for the same name; all
    /// of them are printed, oldest first.
    Get {
        /// Exact file name to look up.
        file_name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Ingest { folder, limit } => {
            ingest::run_ingest(&cfg, folder.as_deref(), limit).await?;
        }
        Commands::Extract { folder } => {
            ingest::run_extract(&cfg, folder.as_deref()).await?;
        }
        Commands::Get { file_name } => {
            store::run_get(&cfg, &file_name).await?;
        }
    }

    Ok(())
}
