use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::error;

use crate::error::Error;
use crate::ids::IdAllocator;
use crate::metadata::{DirRecord, FileRecord};

/// Parent ID assigned to entries directly under the scan root. The root
/// itself is never persisted.
pub const ROOT_PARENT_ID: i64 = 0;

/// Persistence boundary for scan records.
///
/// The walker guarantees that a directory's record is inserted strictly
/// before any record referencing its ID, so an implementation may enforce
/// foreign-key-style integrity on `parent_id`.
pub trait RecordSink {
    fn insert_dir(&mut self, record: &DirRecord) -> Result<(), Error>;
    fn insert_file(&mut self, record: &FileRecord) -> Result<(), Error>;
}

/// Sequential recursive traversal that converts a directory hierarchy into a
/// flat record stream.
///
/// For each directory visited, every immediate child is recorded first:
/// subdirectories get a fresh directory ID and are remembered, everything
/// else becomes a file record. Only then does the walker recurse into the
/// remembered subdirectories. Sibling order is whatever the filesystem
/// returns.
pub struct TreeWalker<'a, S: RecordSink> {
    ids: &'a IdAllocator,
    sink: &'a mut S,
    ignore: Vec<Pattern>,
}

impl<'a, S: RecordSink> TreeWalker<'a, S> {
    pub fn new(ids: &'a IdAllocator, sink: &'a mut S) -> Self {
        Self {
            ids,
            sink,
            ignore: Vec::new(),
        }
    }

    /// Compile ignore globs. Invalid patterns are logged and dropped.
    pub fn with_ignore_globs(mut self, globs: &[String]) -> Self {
        self.ignore = globs
            .iter()
            .filter_map(|glob| match Pattern::new(glob) {
                Ok(p) => Some(p),
                Err(e) => {
                    error!("Invalid glob pattern '{}': {}", glob, e);
                    None
                }
            })
            .collect();
        self
    }

    /// Visit `dir`, recording every immediate child before recursing into
    /// subdirectories. The first unreadable directory or failed insert
    /// aborts the whole walk.
    pub fn walk(&mut self, dir: &Path, parent_id: i64) -> Result<(), Error> {
        let entries = fs::read_dir(dir).map_err(|e| Error::Unreadable {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut subdirs: Vec<(PathBuf, i64)> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::Unreadable {
                path: dir.to_path_buf(),
                source: e,
            })?;

            if self.ignore.iter().any(|p| p.matches_path(&entry.path())) {
                continue;
            }

            // file_type does not follow symlinks, so a link to a directory
            // lands in the file branch and is never recursed into.
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                let id = self.ids.next_dir_id();
                let name = entry.file_name().to_string_lossy().into_owned();
                let record = DirRecord::new(dir, &name, id, parent_id);
                self.sink.insert_dir(&record)?;
                subdirs.push((entry.path(), id));
            } else {
                let id = self.ids.next_file_id();
                let record = FileRecord::extract(&entry, id, parent_id)?;
                self.sink.insert_file(&record)?;
            }
        }

        for (path, id) in subdirs {
            self.walk(&path, id)?;
        }
        Ok(())
    }
}
