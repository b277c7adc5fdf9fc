pub mod accounts;
pub mod import;
pub mod init;
pub mod movements;
pub mod segments;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "libreta", about = "SQLite-backed ledger store with a ContPAQ spreadsheet importer.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up Libreta: choose a data directory and initialize the database.
    Init {
        /// Path for Libreta data (default: ~/Documents/libreta)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Import a ContPAQ XLSX export into the ledger.
    Import {
        /// Path to the XLSX file to import
        file: String,
    },
    /// Manage accounting accounts.
    Accounts {
        #[command(subcommand)]
        command: AccountsCommands,
    },
    /// Manage segments.
    Segments {
        #[command(subcommand)]
        command: SegmentsCommands,
    },
    /// List imported movements.
    Movements {
        /// Filter by account code
        #[arg(long)]
        account: Option<String>,
        /// Filter by segment code
        #[arg(long)]
        segment: Option<String>,
    },
    /// Show current database and summary statistics.
    Status,
}

#[derive(Subcommand)]
pub enum AccountsCommands {
    /// Add an accounting account (code format: 000-000-000-000-00).
    Add { code: String, name: String },
    /// List accounting accounts.
    List,
}

#[derive(Subcommand)]
pub enum SegmentsCommands {
    /// Add a segment.
    Add {
        code: String,
        /// Display name (default: "Segmento <code>")
        #[arg(long)]
        name: Option<String>,
    },
    /// List segments.
    List,
}
