use std::path::Path;

use rusqlite::{params, Connection, Result};
use tracing::debug;

use crate::error::Error;
use crate::metadata::{DirRecord, FileRecord};
use crate::scanner::RecordSink;

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Database { conn };
        db.configure_pragmas()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        db.configure_pragmas()?;
        Ok(db)
    }

    // foreign_keys is forced off: the scan root is the sentinel parent 0 with
    // no backing row. rusqlite's bundled SQLite defaults this pragma ON
    // (SQLITE_DEFAULT_FOREIGN_KEYS=1), so it must be disabled explicitly.
    fn configure_pragmas(&self) -> Result<()> {
        self.conn.execute_batch(
            "PRAGMA foreign_keys = OFF;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA cache_size = -64000;
             PRAGMA busy_timeout = 5000;",
        )?;
        debug!("SQLite pragmas configured (WAL mode, 64MB cache)");
        Ok(())
    }

    /// Create the dirs/files schema. Safe to call on an already-initialized
    /// store; a scan against a store that was never initialized fails on the
    /// first insert.
    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(include_str!("schema.sql"))?;
        debug!("SQLite schema initialized");
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// [`RecordSink`] backed by a live SQLite connection. A `rusqlite`
/// `Transaction` derefs to `Connection`, so the engine hands this the
/// scan-wide transaction and every insert lands inside it.
pub struct SqliteSink<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSink<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RecordSink for SqliteSink<'_> {
    fn insert_dir(&mut self, record: &DirRecord) -> Result<(), Error> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT OR REPLACE INTO dirs (dirid, dirname, fulldirname, parentdirid) \
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        stmt.execute(params![
            record.id,
            record.name,
            record.full_path,
            record.parent_id
        ])?;
        Ok(())
    }

    fn insert_file(&mut self, record: &FileRecord) -> Result<(), Error> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT OR REPLACE INTO files \
             (fileid, filename, fullfilename, parentdirid, filesize, filemode, \
              filemtime, fileuid, filegid) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;
        stmt.execute(params![
            record.id,
            record.name,
            record.full_path,
            record.parent_id,
            record.size,
            record.mode,
            record.mtime,
            record.uid,
            record.gid,
        ])?;
        Ok(())
    }
}
