// src/render/export.rs

//! CSV export of filtered rows, in the same column order the mapper reads.

use crate::services::csv::write_rows;
use crate::services::view::{ArticleRow, BookRow};

const ARTICLE_HEADER: [&str; 5] = ["Title", "Author", "Publication", "Date", "URL"];

const BOOK_HEADER: [&str; 9] = [
    "Title",
    "Author",
    "PublishedYear",
    "YearRead",
    "RatingFirst",
    "RatingEOY",
    "GoodreadsRating",
    "Quote",
    "URL",
];

pub fn articles_csv(rows: &[ArticleRow<'_>]) -> String {
    let mut out: Vec<Vec<String>> = vec![ARTICLE_HEADER.iter().map(|h| h.to_string()).collect()];
    out.extend(rows.iter().map(|row| {
        let a = row.article;
        vec![
            a.title.clone(),
            a.author.clone(),
            a.publication.clone(),
            a.date.clone(),
            a.url.clone().unwrap_or_default(),
        ]
    }));
    write_rows(&out)
}

pub fn books_csv(rows: &[BookRow<'_>]) -> String {
    let mut out: Vec<Vec<String>> = vec![BOOK_HEADER.iter().map(|h| h.to_string()).collect()];
    out.extend(rows.iter().map(|row| {
        let b = row.book;
        vec![
            b.title.clone(),
            b.author.clone(),
            b.published_year.clone(),
            b.year_read.clone(),
            b.rating_first.to_string(),
            b.rating_eoy.map(|r| r.to_string()).unwrap_or_default(),
            b.external_rating.to_string(),
            b.quote.clone().unwrap_or_default(),
            b.url.clone().unwrap_or_default(),
        ]
    }));
    write_rows(&out)
}
