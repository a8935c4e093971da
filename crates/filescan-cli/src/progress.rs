use std::sync::Mutex;
use std::time::Duration;

use filescan_core::ProgressObserver;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress line for a running scan: a spinner whose message is refreshed
/// with a counter snapshot on every ticker interval.
pub struct TickerReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl TickerReporter {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message("Scanning...");
        pb.enable_steady_tick(Duration::from_millis(80));
        Self {
            bar: Mutex::new(Some(pb)),
        }
    }
}

impl ProgressObserver for TickerReporter {
    fn on_tick(&self, dirs: u64, files: u64) {
        let guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.as_ref() {
            pb.set_message(format!("Inserted {} files and {} dirs", files, dirs));
        }
    }

    fn on_finish(&self, _dirs: u64, _files: u64, _elapsed: Duration) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.take() {
            pb.finish_and_clear();
        }
    }
}
