use std::path::Path;

use chrono::{Duration, Utc};
use colored::*;
use filescan_core::storage::models::OwnerUsageRow;
use filescan_core::storage::Database;
use filescan_core::Error;

const REPORT_LIMIT: i64 = 10;

pub fn run_reports(db_path: &Path, aging_days: i64) -> Result<(), Error> {
    let db = Database::open(db_path)?;

    let rows = db.file_count_report(REPORT_LIMIT)?;
    println!("\n{}", "File Count Report".bold());
    print_dir_header();
    for row in rows {
        println!(" {:<48} {:>14} {:>18}", row.dir, row.file_count, row.total_size);
    }

    let rows = db.file_size_report(REPORT_LIMIT)?;
    println!("\n{}", "File Size Report".bold());
    print_dir_header();
    for row in rows {
        println!(" {:<48} {:>14} {:>18}", row.dir, row.file_count, row.total_size);
    }

    print_owner_report("File Owner (UID) Report", "UID", db.uid_report(REPORT_LIMIT)?);
    print_owner_report("File Group (GID) Report", "GID", db.gid_report(REPORT_LIMIT)?);

    let now = Utc::now();
    let oldest = (now - Duration::days(aging_days)).timestamp();
    let newest = now.timestamp();
    let aging = db.aging_report(oldest, newest)?;
    println!(
        "\n{}",
        format!("File Aging Report (last {} days)", aging_days).bold()
    );
    println!(" {:>14} {:>18}", "Count of Files", "Sum of File Sizes");
    println!(" {:>14} {:>18}", "----", "----");
    println!(" {:>14} {:>18}", aging.file_count, aging.total_size);

    Ok(())
}

fn print_dir_header() {
    println!(
        " {:<48} {:>14} {:>18}",
        "Dirname", "Count of Files", "Sum of File Sizes"
    );
    println!(" {:<48} {:>14} {:>18}", "----", "----", "----");
}

fn print_owner_report(title: &str, owner_label: &str, rows: Vec<OwnerUsageRow>) {
    println!("\n{}", title.bold());
    println!(
        " {:<12} {:>14} {:>18}",
        owner_label, "Count of Files", "Sum of File Sizes"
    );
    println!(" {:<12} {:>14} {:>18}", "----", "----", "----");
    for row in rows {
        let owner = row
            .owner
            .map(|o| o.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(" {:<12} {:>14} {:>18}", owner, row.file_count, row.total_size);
    }
}
