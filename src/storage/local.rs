//! Local filesystem storage implementation.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::storage::SourceStorage;

/// Reads resources from a directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a resource name.
    fn path(&self, name: &str) -> PathBuf {
        self.root_dir.join(name)
    }
}

#[async_trait]
impl SourceStorage for LocalStorage {
    async fn read_text(&self, name: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path(name)).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn location(&self, name: &str) -> String {
        self.path(name).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_existing_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("books.csv"), "Title\nDune\n").unwrap();

        let storage = LocalStorage::new(dir.path());
        let text = storage.read_text("books.csv").await.unwrap();
        assert_eq!(text.as_deref(), Some("Title\nDune\n"));
        assert!(storage.read_text("articles.csv").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_directory_in_place_of_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("books.csv")).unwrap();

        let storage = LocalStorage::new(dir.path());
        assert!(storage.read_text("books.csv").await.is_err());
    }
}
