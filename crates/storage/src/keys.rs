//! Key names used in durable storage.

use course_core::model::ModuleId;

/// Key under which the last opened module number is stored.
pub const LAST_VIEWED_MODULE: &str = "last-viewed-module";

/// The only value ever written to a completion key.
pub const COMPLETE_VALUE: &str = "true";

/// Completion flag key for one module, e.g. `module-3-complete`.
#[must_use]
pub fn module_complete(id: ModuleId) -> String {
    format!("module-{id}-complete")
}
