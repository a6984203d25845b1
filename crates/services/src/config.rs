use std::path::PathBuf;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_CONTENT_BASE: &str = ".";
pub const DEFAULT_DB_URL: &str = "sqlite://course.sqlite3";

/// Where module markdown files are served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentBase {
    /// Remote static host, e.g. `https://example.com/course/`.
    Remote(Url),
    /// Local directory containing the `content/` folder.
    Directory(PathBuf),
}

impl ContentBase {
    /// Parse a content base. `http://` and `https://` inputs become `Remote`,
    /// anything else is treated as a directory path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the input is blank or the URL is malformed.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyContentBase);
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Remote(Url::parse(trimmed)?));
        }

        Ok(Self::Directory(PathBuf::from(trimmed)))
    }
}

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub content_base: ContentBase,
    pub db_url: String,
}

impl ViewerConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if either value is invalid.
    pub fn new(content_base: &str, db_url: impl Into<String>) -> Result<Self, ConfigError> {
        let db_url = db_url.into();
        if db_url.trim().is_empty() {
            return Err(ConfigError::InvalidDbUrl(db_url));
        }
        Ok(Self {
            content_base: ContentBase::parse(content_base)?,
            db_url,
        })
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            content_base: ContentBase::Directory(PathBuf::from(DEFAULT_CONTENT_BASE)),
            db_url: DEFAULT_DB_URL.to_string(),
        }
    }
}
