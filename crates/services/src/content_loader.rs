use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use course_core::ContentError;
use course_core::document::placeholder_for;
use course_core::model::{ModuleCatalog, ModuleId};
use tracing::{debug, info, warn};

use crate::content_source::ContentSource;
use crate::error::FetchError;

/// Loads module markdown, caching successful fetches for the session.
///
/// `load` never fails: unknown modules and failed fetches come back as
/// placeholder documents, and nothing is cached for them.
pub struct ContentLoader {
    catalog: ModuleCatalog,
    source: Arc<dyn ContentSource>,
    cache: Mutex<HashMap<ModuleId, String>>,
}

impl ContentLoader {
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            catalog: ModuleCatalog::new(),
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> ModuleCatalog {
        self.catalog
    }

    /// Markdown for module `number`, or a placeholder document.
    pub async fn load(&self, number: u32) -> String {
        match self.try_load(number).await {
            Ok(text) => text,
            Err(err) => {
                warn!(module = number, error = %err, "serving placeholder for module");
                placeholder_for(&err)
            }
        }
    }

    /// Like [`ContentLoader::load`], but reports why content is unavailable.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::UnknownModule` without any I/O for numbers outside
    /// the course, and `ContentError::FetchFailure` if the single fetch fails.
    pub async fn try_load(&self, number: u32) -> Result<String, ContentError> {
        let entry = self
            .catalog
            .lookup(number)
            .ok_or(ContentError::UnknownModule(number))?;
        let id = entry.id();

        let cached = self.lock_cache().get(&id).cloned();
        if let Some(cached) = cached {
            debug!(module = number, "using cached content");
            return Ok(cached);
        }

        let path = entry.content_path();
        info!(module = number, path = %path, "fetching module content");

        let text = self
            .source
            .fetch(&path)
            .await
            .and_then(|text| {
                if text.trim().is_empty() {
                    Err(FetchError::Empty)
                } else {
                    Ok(text)
                }
            })
            .map_err(|err| ContentError::FetchFailure {
                module: number,
                reason: err.to_string(),
            })?;

        // A concurrent load of the same module may have finished first; keep its entry.
        let mut cache = self.lock_cache();
        Ok(cache.entry(id).or_insert(text).clone())
    }

    #[must_use]
    pub fn is_cached(&self, id: ModuleId) -> bool {
        self.lock_cache().contains_key(&id)
    }

    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.lock_cache().len()
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<ModuleId, String>> {
        // Entries are inserted whole, so a poisoned map is still consistent.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
