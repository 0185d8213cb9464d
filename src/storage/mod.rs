//! Storage abstractions for the static CSV resources.
//!
//! The reading list is published as plain files next to the site. They can
//! be read straight from a checkout or fetched from the deployed host:
//!
//! ```text
//! public/data/              https://example.com/data/
//! ├── articles.csv          ├── articles.csv
//! └── books.csv             └── books.csv
//! ```

pub mod http;
pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Config;

// Re-export for convenience
pub use http::HttpStorage;
pub use local::LocalStorage;

/// Trait for CSV resource backends.
#[async_trait]
pub trait SourceStorage: Send + Sync {
    /// Read a resource as text, or `Ok(None)` if it does not exist.
    async fn read_text(&self, name: &str) -> Result<Option<String>>;

    /// Human-readable location of a resource, for logs.
    fn location(&self, name: &str) -> String;
}

/// Open the backend described by `config.source`.
pub fn open(config: &Config) -> Result<Box<dyn SourceStorage>> {
    if config.source.is_remote() {
        Ok(Box::new(HttpStorage::new(&config.source.base, &config.http)?))
    } else {
        Ok(Box::new(LocalStorage::new(&config.source.base)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_picks_backend_by_base() {
        let mut config = Config::default();
        let local = open(&config).unwrap();
        assert!(local.location("books.csv").ends_with("books.csv"));
        assert!(!local.location("books.csv").starts_with("http"));

        config.source.base = "https://example.com/data".to_string();
        let remote = open(&config).unwrap();
        assert_eq!(remote.location("books.csv"), "https://example.com/data/books.csv");
    }
}
