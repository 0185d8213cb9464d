// src/models/mod.rs

//! Domain models for the reading list.
//!
//! This module contains the record types loaded from the CSV files,
//! the rating and decade value types, and application configuration.

mod article;
mod book;
mod config;
mod reading_list;

// Re-export all public types
pub use article::Article;
pub use book::{Book, Decade, Rating, Snapshot};
pub use config::{ColumnLayout, Config, DisplayConfig, HttpConfig, MappingConfig, SourceConfig};
pub use reading_list::{LoadState, LoadStats, ReadingList, SourceStatus};
