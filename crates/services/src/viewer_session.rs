use std::sync::Arc;

use course_core::ContentError;
use course_core::document::placeholder_for;
use course_core::model::{ModuleCatalog, ModuleId, Progress, ProgressSnapshot};
use storage::repository::{KeyValueStore, Storage};
use tracing::warn;

use crate::config::ViewerConfig;
use crate::content_loader::ContentLoader;
use crate::content_source::{ContentSource, source_for};
use crate::error::{ProgressError, ViewerSessionError};
use crate::progress_tracker::ProgressTracker;

/// Module content ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedModule {
    pub number: u32,
    pub title: String,
    pub markdown: String,
}

/// State owned by one run of the viewer: the content cache and progress tracking.
///
/// Dropping the session discards the cache; progress lives in durable storage.
#[derive(Clone)]
pub struct ViewerSession {
    loader: Arc<ContentLoader>,
    tracker: Arc<ProgressTracker>,
}

impl ViewerSession {
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            loader: Arc::new(ContentLoader::new(source)),
            tracker: Arc::new(ProgressTracker::new(store)),
        }
    }

    /// Open durable storage and the configured content source.
    ///
    /// # Errors
    ///
    /// Returns `ViewerSessionError` if the database cannot be opened or migrated.
    pub async fn from_config(config: &ViewerConfig) -> Result<Self, ViewerSessionError> {
        let storage = Storage::sqlite(&config.db_url).await?;
        Ok(Self::new(source_for(&config.content_base), storage.kv))
    }

    #[must_use]
    pub fn catalog(&self) -> ModuleCatalog {
        self.loader.catalog()
    }

    #[must_use]
    pub fn loader(&self) -> Arc<ContentLoader> {
        Arc::clone(&self.loader)
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }

    /// Load a module for display and remember it as last viewed.
    ///
    /// The load runs on its own task, so dropping the returned future (for
    /// example when the modal closes) does not stop the fetch from filling
    /// the cache or the last-viewed key from being written.
    pub async fn open_module(&self, number: u32) -> OpenedModule {
        let session = self.clone();
        let task = tokio::spawn(async move { session.load_and_record(number).await });

        match task.await {
            Ok(opened) => opened,
            Err(err) => {
                warn!(module = number, error = %err, "module load task did not finish");
                let cause = match self.catalog().lookup(number) {
                    Some(_) => ContentError::FetchFailure {
                        module: number,
                        reason: err.to_string(),
                    },
                    None => ContentError::UnknownModule(number),
                };
                OpenedModule {
                    number,
                    title: self.title_for(number),
                    markdown: placeholder_for(&cause),
                }
            }
        }
    }

    async fn load_and_record(&self, number: u32) -> OpenedModule {
        let markdown = self.loader.load(number).await;

        if let Some(entry) = self.catalog().lookup(number)
            && let Err(err) = self.tracker.record_last_viewed(entry.id()).await
        {
            warn!(module = number, error = %err, "failed to record last viewed module");
        }

        OpenedModule {
            number,
            title: self.title_for(number),
            markdown,
        }
    }

    fn title_for(&self, number: u32) -> String {
        self.catalog()
            .lookup(number)
            .map_or_else(|| format!("Module {number}"), |e| e.title().to_string())
    }

    /// # Errors
    ///
    /// Returns `ProgressError` on storage failures.
    pub async fn mark_complete(&self, id: ModuleId) -> Result<Progress, ProgressError> {
        self.tracker.mark_complete(id).await
    }

    /// # Errors
    ///
    /// Returns `ProgressError` on storage failures.
    pub async fn load_progress(&self) -> Result<ProgressSnapshot, ProgressError> {
        self.tracker.load_progress().await
    }
}
