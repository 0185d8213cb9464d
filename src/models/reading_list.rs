//! The loaded reading list and its load lifecycle.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Article, Book};

/// Both record lists, in source file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadingList {
    pub articles: Vec<Article>,
    pub books: Vec<Book>,
}

/// Whether the initial fetch of both resources has settled.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(ReadingList),
}

impl LoadState {
    pub fn list(&self) -> Option<&ReadingList> {
        match self {
            LoadState::Loading => None,
            LoadState::Ready(list) => Some(list),
        }
    }
}

/// Outcome of fetching one CSV resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceStatus {
    Loaded { records: usize },
    Missing,
    Failed { reason: String },
}

/// Statistics for a load run.
#[derive(Debug, Clone, Serialize)]
pub struct LoadStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub articles: SourceStatus,
    pub books: SourceStatus,
}
