// src/services/facets.rs

//! Selectable values for each filter dimension, derived from loaded records.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{Article, Book, Decade, Snapshot};

/// Filter pill options for one tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Distinct non-empty authors, alphabetical
    pub authors: Vec<String>,
    /// Distinct decades, oldest first
    pub decades: Vec<Decade>,
    /// Distinct years read, most recent first
    pub years_read: Vec<String>,
    /// Whole-star buckets present under the snapshot, ascending
    pub ratings: Vec<u8>,
}

impl Facets {
    pub fn for_articles(articles: &[Article]) -> Self {
        Self {
            authors: distinct(articles.iter().map(|a| a.author.as_str())),
            ..Self::default()
        }
    }

    pub fn for_books(books: &[Book], snapshot: Snapshot) -> Self {
        let decades: BTreeSet<Decade> = books.iter().filter_map(Book::decade).collect();
        let ratings: BTreeSet<u8> = books
            .iter()
            .map(|b| b.filter_rating(snapshot).whole_stars())
            .collect();

        let mut years_read = distinct(books.iter().map(|b| b.year_read.as_str()));
        years_read.sort_by_key(|y| Reverse(y.clone()));

        Self {
            authors: distinct(books.iter().map(|b| b.author.as_str())),
            decades: decades.into_iter().collect(),
            years_read,
            ratings: ratings.into_iter().collect(),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
