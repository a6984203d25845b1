#![forbid(unsafe_code)]

pub mod config;
pub mod content_loader;
pub mod content_source;
pub mod error;
pub mod progress_tracker;
pub mod viewer_session;

pub use config::{ContentBase, ViewerConfig};
pub use content_loader::ContentLoader;
pub use content_source::{ContentSource, DirectoryContentSource, HttpContentSource};
pub use error::{ConfigError, FetchError, ProgressError, ViewerSessionError};
pub use progress_tracker::ProgressTracker;
pub use viewer_session::{OpenedModule, ViewerSession};
