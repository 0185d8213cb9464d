//! Article data structure.

use serde::Serialize;

/// An article from `articles.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Article headline
    pub title: String,

    /// Author name(s), as written in the file
    pub author: String,

    /// Publication or outlet name
    pub publication: String,

    /// Free-text date, never parsed
    pub date: String,

    /// Link to the article, when one was recorded
    pub url: Option<String>,
}
