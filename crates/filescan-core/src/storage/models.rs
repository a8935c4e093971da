/// One row of a per-directory usage report. Files directly under the scan
/// root group under the sentinel label.
#[derive(Debug, Clone)]
pub struct DirUsageRow {
    pub dir: String,
    pub file_count: i64,
    pub total_size: i64,
}

/// One row of a per-owner usage report (uid or gid). `owner` is None for
/// files recorded on platforms without POSIX ownership.
#[derive(Debug, Clone)]
pub struct OwnerUsageRow {
    pub owner: Option<i64>,
    pub file_count: i64,
    pub total_size: i64,
}

/// Totals for files whose mtime falls inside an aging window.
#[derive(Debug, Clone)]
pub struct AgingSummary {
    pub file_count: i64,
    pub total_size: i64,
}
