mod catalog;
mod ids;
mod progress;

pub use catalog::{ModuleCatalog, ModuleEntry};
pub use ids::{ModuleId, ModuleIdError};
pub use progress::{ModuleStatus, Progress, ProgressSnapshot};
