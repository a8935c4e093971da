use std::fs::{DirEntry, Metadata};
use std::path::Path;
use std::time::UNIX_EPOCH;

use crate::error::Error;

/// A directory discovered during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirRecord {
    pub id: i64,
    pub name: String,
    pub full_path: String,
    pub parent_id: i64,
}

impl DirRecord {
    pub fn new(parent_path: &Path, name: &str, id: i64, parent_id: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            full_path: parent_path.join(name).to_string_lossy().into_owned(),
            parent_id,
        }
    }
}

/// A file (or any non-directory entry) discovered during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub id: i64,
    pub name: String,
    pub full_path: String,
    pub parent_id: i64,
    pub size: i64,
    pub mode: u32,
    pub uid: Option<u32>,
    pub gid: Option<u32>,
    /// Last modification time as whole epoch seconds.
    pub mtime: i64,
}

impl FileRecord {
    /// Build a record from a directory entry. `DirEntry::metadata` has lstat
    /// semantics, so symlinks are never followed and a broken link still
    /// yields a record. Fails only if the stat itself fails.
    pub fn extract(entry: &DirEntry, id: i64, parent_id: i64) -> Result<Self, Error> {
        let metadata = entry.metadata()?;
        let mtime = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        Ok(Self {
            id,
            name: entry.file_name().to_string_lossy().into_owned(),
            full_path: entry.path().to_string_lossy().into_owned(),
            parent_id,
            size: metadata.len() as i64,
            mode: get_mode(&metadata),
            uid: get_uid(&metadata),
            gid: get_gid(&metadata),
            mtime,
        })
    }
}

// Cross-platform metadata helpers. Ownership is a POSIX concept; platforms
// without it yield None rather than failing the scan.

#[cfg(unix)]
fn get_mode(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    metadata.mode()
}

#[cfg(not(unix))]
fn get_mode(_metadata: &Metadata) -> u32 {
    0
}

#[cfg(unix)]
fn get_uid(metadata: &Metadata) -> Option<u32> {
    use std::os::unix::fs::MetadataExt;
    Some(metadata.uid())
}

#[cfg(not(unix))]
fn get_uid(_metadata: &Metadata) -> Option<u32> {
    None
}

#[cfg(unix)]
fn get_gid(metadata: &Metadata) -> Option<u32> {
    use std::os::unix::fs::MetadataExt;
    Some(metadata.gid())
}

#[cfg(not(unix))]
fn get_gid(_metadata: &Metadata) -> Option<u32> {
    None
}
