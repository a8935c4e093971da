use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out surrogate identifiers for one scan invocation.
///
/// Directory IDs and file IDs come from independent counters, both starting
/// at 1 and strictly increasing; the two namespaces may collide numerically
/// without conflict. The counters are atomic so the progress ticker can read
/// them while the walker increments. A slightly stale snapshot is fine for
/// display, so relaxed ordering suffices.
#[derive(Debug, Default)]
pub struct IdAllocator {
    dirs: AtomicI64,
    files: AtomicI64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_dir_id(&self) -> i64 {
        self.dirs.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn next_file_id(&self) -> i64 {
        self.files.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of directory IDs handed out so far.
    pub fn dir_count(&self) -> u64 {
        self.dirs.load(Ordering::Relaxed) as u64
    }

    /// Number of file IDs handed out so far.
    pub fn file_count(&self) -> u64 {
        self.files.load(Ordering::Relaxed) as u64
    }
}
