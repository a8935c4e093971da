pub mod config;
pub mod engine;
pub mod error;
pub mod ids;
pub mod metadata;
pub mod progress;
pub mod scanner;
pub mod storage;

pub use config::AppConfig;
pub use engine::{ScanEngine, ScanOutcome};
pub use error::Error;
pub use ids::IdAllocator;
pub use progress::{ProgressObserver, ProgressTicker, SilentObserver};
pub use scanner::{RecordSink, TreeWalker, ROOT_PARENT_ID};
pub use storage::Database;
