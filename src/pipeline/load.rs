// src/pipeline/load.rs

//! Reading list loading pipeline.
//!
//! Both resources are requested together and the list is ready only once
//! both have settled. A resource that is missing or fails to load
//! contributes zero records; the other list is unaffected.

use chrono::Utc;

use crate::error::Result;
use crate::models::{Config, LoadStats, ReadingList, SourceConfig, SourceStatus};
use crate::services::RecordMapper;
use crate::storage::{self, SourceStorage};

/// Fetch and map both lists from `storage`.
pub async fn load_reading_list(
    storage: &dyn SourceStorage,
    source: &SourceConfig,
    mapper: RecordMapper,
) -> (ReadingList, LoadStats) {
    let start_time = Utc::now();

    let (articles_text, books_text) = futures::join!(
        storage.read_text(&source.articles),
        storage.read_text(&source.books),
    );

    let (articles, articles_status) = settle(
        &storage.location(&source.articles),
        articles_text,
        |text| mapper.parse_articles(text),
    );
    let (books, books_status) = settle(
        &storage.location(&source.books),
        books_text,
        |text| mapper.parse_books(text),
    );

    let stats = LoadStats {
        start_time,
        end_time: Utc::now(),
        articles: articles_status,
        books: books_status,
    };

    (ReadingList { articles, books }, stats)
}

/// Load the reading list described by `config`.
///
/// Only an unusable source configuration is an error; fetch failures
/// degrade to empty lists.
pub async fn run_load(config: &Config) -> Result<(ReadingList, LoadStats)> {
    let storage = storage::open(config)?;
    let mapper = RecordMapper::new(config.mapping.layout);

    log::info!(
        "Loading reading list from {}",
        storage.location("").trim_end_matches(['/', '\\'])
    );
    let (list, stats) = load_reading_list(storage.as_ref(), &config.source, mapper).await;
    log::info!(
        "Loaded {} articles and {} books",
        list.articles.len(),
        list.books.len()
    );

    Ok((list, stats))
}

fn settle<T>(
    location: &str,
    fetched: Result<Option<String>>,
    map: impl FnOnce(&str) -> Vec<T>,
) -> (Vec<T>, SourceStatus) {
    match fetched {
        Ok(Some(text)) => {
            let records = map(&text);
            log::debug!("{}: {} records", location, records.len());
            let status = SourceStatus::Loaded {
                records: records.len(),
            };
            (records, status)
        }
        Ok(None) => {
            log::warn!("{} not found; treating as empty", location);
            (Vec::new(), SourceStatus::Missing)
        }
        Err(error) => {
            log::warn!("Failed to load {}: {}", location, error);
            (
                Vec::new(),
                SourceStatus::Failed {
                    reason: error.to_string(),
                },
            )
        }
    }
}
