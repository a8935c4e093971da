use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "filescan")]
#[command(about = "Scan a directory tree into SQLite and report on usage", long_about = None)]
pub struct Cli {
    /// Path to the SQLite store
    #[arg(long = "db", value_name = "FILE", global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the store schema, then exit
    Init,
    /// Walk a directory tree and persist every entry
    Scan {
        /// Root directory to traverse
        #[arg(long, value_name = "DIR")]
        path: PathBuf,
    },
    /// Run the usage reports against an existing store
    Report {
        /// Aging window in days for the file-aging report
        #[arg(long, default_value_t = 10)]
        days: i64,
    },
}
