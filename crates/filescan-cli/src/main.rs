mod commands;
mod logging;
mod progress;
mod report;

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::Parser;
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use filescan_core::storage::Database;
use filescan_core::ScanEngine;
use progress::TickerReporter;
use tracing::error;

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            process::exit(3);
        }
    };

    let config = match filescan_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(3);
        }
    };

    let db_path = match args.db.or_else(|| config.db_path.clone().map(PathBuf::from)) {
        Some(path) => path,
        None => {
            eprintln!("Must supply a store path with --db");
            process::exit(3);
        }
    };

    match args.command {
        Commands::Init => {
            if let Err(err) = run_init(&db_path) {
                error!("Error initializing store {}: {}", db_path.display(), err);
                process::exit(1);
            }
            println!("Created store {}", db_path.display());
        }
        Commands::Scan { path } => {
            if let Err(err) = run_scan(&db_path, &path, config.ignore_patterns) {
                error!("Error scanning {}: {}", path.display(), err);
                process::exit(1);
            }
        }
        Commands::Report { days } => {
            if let Err(err) = report::run_reports(&db_path, days) {
                error!("Error running reports: {}", err);
                process::exit(3);
            }
        }
    }
}

fn run_init(db_path: &Path) -> Result<(), filescan_core::Error> {
    let db = Database::open(db_path)?;
    db.init_schema()?;
    Ok(())
}

fn run_scan(
    db_path: &Path,
    root: &Path,
    ignore_patterns: Vec<String>,
) -> Result<(), filescan_core::Error> {
    let db = Database::open(db_path)?;
    let engine = ScanEngine::new(db).with_ignore_patterns(ignore_patterns);
    let outcome = engine.scan(root, Arc::new(TickerReporter::new()))?;

    println!();
    println!(
        "Inserted {} files and {} dirs in {}",
        outcome.files_inserted.to_string().green(),
        outcome.dirs_inserted.to_string().green(),
        format!("{:.2}s", outcome.duration.as_secs_f64()).green(),
    );
    Ok(())
}
