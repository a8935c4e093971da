use rusqlite::{params, Result};

use super::models::{AgingSummary, DirUsageRow, OwnerUsageRow};
use super::sqlite::Database;

/// Label for the group of files directly under the scan root, which has no
/// dirs row of its own.
const ROOT_LABEL: &str = "(scan root)";

impl Database {
    // ── Usage Reports ────────────────────────────────────────────

    /// Top directories by count of directly contained files.
    pub fn file_count_report(&self, limit: i64) -> Result<Vec<DirUsageRow>> {
        self.dir_usage_report("count DESC", limit)
    }

    /// Top directories by total size of directly contained files.
    pub fn file_size_report(&self, limit: i64) -> Result<Vec<DirUsageRow>> {
        self.dir_usage_report("total DESC", limit)
    }

    fn dir_usage_report(&self, order_by: &str, limit: i64) -> Result<Vec<DirUsageRow>> {
        // LEFT JOIN keeps the sentinel-parented group (parentdirid 0).
        let sql = format!(
            "SELECT COALESCE(d.fulldirname, '{ROOT_LABEL}') AS dirname, \
                    COUNT(f.fileid) AS count, \
                    COALESCE(SUM(f.filesize), 0) AS total \
             FROM files AS f \
             LEFT JOIN dirs AS d ON d.dirid = f.parentdirid \
             GROUP BY f.parentdirid \
             ORDER BY {order_by} \
             LIMIT ?1"
        );
        let mut stmt = self.connection().prepare(&sql)?;
        let rows = stmt
            .query_map(params![limit], |row| {
                Ok(DirUsageRow {
                    dir: row.get(0)?,
                    file_count: row.get(1)?,
                    total_size: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Top owning UIDs by file count.
    pub fn uid_report(&self, limit: i64) -> Result<Vec<OwnerUsageRow>> {
        self.owner_usage_report("fileuid", limit)
    }

    /// Top owning GIDs by file count.
    pub fn gid_report(&self, limit: i64) -> Result<Vec<OwnerUsageRow>> {
        self.owner_usage_report("filegid", limit)
    }

    fn owner_usage_report(&self, column: &str, limit: i64) -> Result<Vec<OwnerUsageRow>> {
        let sql = format!(
            "SELECT {column}, COUNT(fileid) AS count, COALESCE(SUM(filesize), 0) \
             FROM files \
             GROUP BY {column} \
             ORDER BY count DESC \
             LIMIT ?1"
        );
        let mut stmt = self.connection().prepare(&sql)?;
        let rows = stmt
            .query_map(params![limit], |row| {
                Ok(OwnerUsageRow {
                    owner: row.get(0)?,
                    file_count: row.get(1)?,
                    total_size: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Count and size of files modified strictly inside the window
    /// `oldest < filemtime < newest` (epoch seconds).
    pub fn aging_report(&self, oldest: i64, newest: i64) -> Result<AgingSummary> {
        self.connection().query_row(
            "SELECT COUNT(fileid), COALESCE(SUM(filesize), 0) FROM files \
             WHERE filemtime > ?1 AND filemtime < ?2",
            params![oldest, newest],
            |row| {
                Ok(AgingSummary {
                    file_count: row.get(0)?,
                    total_size: row.get(1)?,
                })
            },
        )
    }
}
