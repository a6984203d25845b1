use std::sync::Arc;

use course_core::model::{ModuleId, Progress, ProgressSnapshot};
use storage::keys;
use storage::repository::KeyValueStore;
use tracing::{debug, warn};

use crate::error::ProgressError;

/// Records module completion in durable storage and derives course progress.
#[derive(Clone)]
pub struct ProgressTracker {
    store: Arc<dyn KeyValueStore>,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Mark a module complete and return the recomputed progress.
    ///
    /// Idempotent. There is no inverse operation.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the flag cannot be written or read back.
    pub async fn mark_complete(&self, id: ModuleId) -> Result<Progress, ProgressError> {
        self.store
            .set(&keys::module_complete(id), keys::COMPLETE_VALUE)
            .await?;
        debug!(module = %id, "module marked complete");
        self.progress().await
    }

    /// Read every completion flag and the last-viewed module.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` on storage failures.
    pub async fn load_progress(&self) -> Result<ProgressSnapshot, ProgressError> {
        let progress = self.progress().await?;
        let last_viewed = self.last_viewed().await?;
        Ok(ProgressSnapshot {
            progress,
            last_viewed,
        })
    }

    /// Remember `id` as the most recently opened module.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the value cannot be written.
    pub async fn record_last_viewed(&self, id: ModuleId) -> Result<(), ProgressError> {
        self.store
            .set(keys::LAST_VIEWED_MODULE, &id.to_string())
            .await?;
        Ok(())
    }

    async fn progress(&self) -> Result<Progress, ProgressError> {
        let mut completed = Vec::with_capacity(ModuleId::COUNT);
        for id in ModuleId::all() {
            let flag = self.store.get(&keys::module_complete(id)).await?;
            if flag.as_deref() == Some(keys::COMPLETE_VALUE) {
                completed.push(id);
            }
        }
        Ok(Progress::new(completed))
    }

    async fn last_viewed(&self) -> Result<Option<ModuleId>, ProgressError> {
        let Some(raw) = self.store.get(keys::LAST_VIEWED_MODULE).await? else {
            return Ok(None);
        };
        match raw.parse::<ModuleId>() {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                warn!(value = %raw, error = %err, "ignoring stored last-viewed module");
                Ok(None)
            }
        }
    }
}
