use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::ContentBase;
use crate::error::FetchError;

/// Retrieves raw module markdown by path relative to the content base.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the file at `path` (e.g. `content/module1_api_fundamentals.md`).
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on a non-success status, transport failure, or
    /// a body that is not UTF-8.
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

/// Build the source matching a configured base.
#[must_use]
pub fn source_for(base: &ContentBase) -> Arc<dyn ContentSource> {
    match base {
        ContentBase::Remote(url) => Arc::new(HttpContentSource::new(url.clone())),
        ContentBase::Directory(root) => Arc::new(DirectoryContentSource::new(root.clone())),
    }
}

/// Fetches content from a static HTTP host.
#[derive(Clone)]
pub struct HttpContentSource {
    client: Client,
    base: Url,
}

impl HttpContentSource {
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self::with_client(Client::new(), base)
    }

    #[must_use]
    pub fn with_client(client: Client, mut base: Url) -> Self {
        // `Url::join` drops the last path segment unless the base ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { client, base }
    }

    /// Absolute URL for a relative content path.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if `path` cannot be joined onto the base.
    pub fn resolve(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = self.resolve(path)?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        String::from_utf8(body.to_vec()).map_err(|_| FetchError::InvalidUtf8)
    }
}

/// Reads content from a local directory laid out like the static site.
#[derive(Clone, Debug)]
pub struct DirectoryContentSource {
    root: PathBuf,
}

impl DirectoryContentSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentSource for DirectoryContentSource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full = self.root.join(path);
        let bytes = tokio::fs::read(&full).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                FetchError::NotFound(full.display().to_string())
            } else {
                FetchError::Io(err)
            }
        })?;
        String::from_utf8(bytes).map_err(|_| FetchError::InvalidUtf8)
    }
}
