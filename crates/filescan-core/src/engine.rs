use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::error::Error;
use crate::ids::IdAllocator;
use crate::progress::{ProgressObserver, ProgressTicker};
use crate::scanner::{TreeWalker, ROOT_PARENT_ID};
use crate::storage::{Database, SqliteSink};

const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Orchestrates one scan: a single transaction around the whole walk, a
/// background progress ticker, commit on success.
pub struct ScanEngine {
    db: Database,
    ignore_patterns: Vec<String>,
}

#[derive(Debug)]
pub struct ScanOutcome {
    pub dirs_inserted: u64,
    pub files_inserted: u64,
    pub duration: Duration,
}

impl ScanEngine {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            ignore_patterns: Vec::new(),
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Walk `root` and persist every directory and file under it inside a
    /// single transaction. Any scan error rolls the whole transaction back:
    /// a failed scan leaves the store exactly as it was.
    pub fn scan(
        &self,
        root: &Path,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<ScanOutcome, Error> {
        let start = Instant::now();
        let ids = Arc::new(IdAllocator::new());

        info!("Scanning {}", root.display());
        let tx = self.db.connection().unchecked_transaction()?;
        let ticker =
            ProgressTicker::spawn(Arc::clone(&ids), Arc::clone(&observer), TICK_INTERVAL);

        let walk_result = {
            let mut sink = SqliteSink::new(&tx);
            TreeWalker::new(&ids, &mut sink)
                .with_ignore_globs(&self.ignore_patterns)
                .walk(root, ROOT_PARENT_ID)
        };

        ticker.stop();
        let duration = start.elapsed();
        observer.on_finish(ids.dir_count(), ids.file_count(), duration);

        match walk_result {
            Ok(()) => {
                tx.commit()?;
                debug!(
                    "Scan completed in {:.2}s — {} dirs, {} files",
                    duration.as_secs_f64(),
                    ids.dir_count(),
                    ids.file_count(),
                );
                Ok(ScanOutcome {
                    dirs_inserted: ids.dir_count(),
                    files_inserted: ids.file_count(),
                    duration,
                })
            }
            Err(err) => {
                error!("Scan of {} failed: {}", root.display(), err);
                if let Err(rollback_err) = tx.rollback() {
                    error!("Rollback failed: {}", rollback_err);
                }
                Err(err)
            }
        }
    }
}
