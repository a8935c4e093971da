use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::ids::IdAllocator;

/// Observer for live scan progress.
///
/// The CLI implements this with an indicatif spinner; tests use
/// [`SilentObserver`]. All methods have default no-op implementations.
pub trait ProgressObserver: Send + Sync {
    fn on_tick(&self, _dirs: u64, _files: u64) {}
    fn on_finish(&self, _dirs: u64, _files: u64, _elapsed: Duration) {}
}

/// No-op observer for silent operation.
pub struct SilentObserver;

impl ProgressObserver for SilentObserver {}

/// Background thread that snapshots the allocator counters once per interval
/// and reports them to the observer. Purely observational: it never mutates
/// allocator or sink state. `stop` signals the thread and joins it, so it
/// terminates within one tick and nothing prints after the scan returns.
pub struct ProgressTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    pub fn spawn(
        ids: Arc<IdAllocator>,
        observer: Arc<dyn ProgressObserver>,
        interval: Duration,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                thread::sleep(interval);
                if stop_flag.load(Ordering::Relaxed) {
                    break;
                }
                observer.on_tick(ids.dir_count(), ids.file_count());
            }
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Signal the ticker and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
