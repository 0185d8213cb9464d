//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the CSV resources live
    #[serde(default)]
    pub source: SourceConfig,

    /// HTTP client settings for remote sources
    #[serde(default)]
    pub http: HttpConfig,

    /// How CSV columns map onto record fields
    #[serde(default)]
    pub mapping: MappingConfig,

    /// Rendering settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.base.trim().is_empty() {
            return Err(AppError::validation("source.base is empty"));
        }
        if self.source.articles.trim().is_empty() {
            return Err(AppError::validation("source.articles is empty"));
        }
        if self.source.books.trim().is_empty() {
            return Err(AppError::validation("source.books is empty"));
        }
        if self.source.is_remote() {
            url::Url::parse(&self.source.base)?;
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.display.max_width == Some(0) {
            return Err(AppError::validation("display.max_width must be > 0"));
        }
        Ok(())
    }
}

/// Location of the static CSV resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Directory path, or an `http(s)://` base URL
    #[serde(default = "defaults::base")]
    pub base: String,

    /// Articles resource name, relative to `base`
    #[serde(default = "defaults::articles")]
    pub articles: String,

    /// Books resource name, relative to `base`
    #[serde(default = "defaults::books")]
    pub books: String,
}

impl SourceConfig {
    /// Whether `base` points at a web host rather than a directory.
    pub fn is_remote(&self) -> bool {
        let base = self.base.trim_start();
        base.starts_with("http://") || base.starts_with("https://")
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base: defaults::base(),
            articles: defaults::articles(),
            books: defaults::books(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Column binding strategy for the record mapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnLayout {
    /// Fixed column order; header text is ignored
    #[default]
    Position,
    /// Columns located by header name, falling back to position
    Header,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingConfig {
    #[serde(default)]
    pub layout: ColumnLayout,
}

/// Rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Page heading
    #[serde(default = "defaults::title")]
    pub title: String,

    /// Name printed in the page footer
    #[serde(default)]
    pub owner: String,

    /// Maximum terminal table width in columns
    #[serde(default)]
    pub max_width: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: defaults::title(),
            owner: String::new(),
            max_width: None,
        }
    }
}

mod defaults {
    // Source defaults
    pub fn base() -> String {
        "public/data".into()
    }
    pub fn articles() -> String {
        "articles.csv".into()
    }
    pub fn books() -> String {
        "books.csv".into()
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; reading-list/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Display defaults
    pub fn title() -> String {
        "Reading".into()
    }
}
