// src/services/mapper.rs

//! Record mapper.
//!
//! Turns tokenized CSV rows into [`Article`] and [`Book`] records. Row 0 is
//! always the header and is skipped. Under [`ColumnLayout::Position`] column
//! order is the contract; under [`ColumnLayout::Header`] each field is looked
//! up by header name first and falls back to its position, unless another
//! field's header already claims that column.
//!
//! Nothing is rejected: missing cells become empty strings, unparsable
//! numbers become zero, and empty optional cells become `None`.

use crate::models::{Article, Book, ColumnLayout, Rating};
use crate::services::csv::parse_rows;
use crate::utils::number::parse_leading_float;

/// A record field: its positional index and the header names that bind it.
struct Field {
    position: usize,
    names: &'static [&'static str],
}

const ARTICLE_FIELDS: [Field; 5] = [
    Field { position: 0, names: &["title"] },
    Field { position: 1, names: &["author", "authors"] },
    Field { position: 2, names: &["publication", "outlet", "source"] },
    Field { position: 3, names: &["date"] },
    Field { position: 4, names: &["url", "link"] },
];

const BOOK_FIELDS: [Field; 9] = [
    Field { position: 0, names: &["title"] },
    Field { position: 1, names: &["author", "authors"] },
    Field { position: 2, names: &["publishedyear", "published", "yearpublished"] },
    Field { position: 3, names: &["yearread", "read"] },
    Field { position: 4, names: &["ratingfirst", "firstread", "atfirstread"] },
    Field { position: 5, names: &["ratingeoy", "eoy", "ateoy"] },
    Field { position: 6, names: &["goodreadsrating", "goodreads", "externalrating"] },
    Field { position: 7, names: &["quote"] },
    Field { position: 8, names: &["url", "link"] },
];

/// Column index of a field with no cell of its own; always reads empty.
const UNBOUND: usize = usize::MAX;

/// Maps parsed rows onto typed records.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordMapper {
    layout: ColumnLayout,
}

impl RecordMapper {
    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    /// Tokenize and map `articles.csv` content.
    pub fn parse_articles(&self, text: &str) -> Vec<Article> {
        self.articles(&parse_rows(text))
    }

    /// Tokenize and map `books.csv` content.
    pub fn parse_books(&self, text: &str) -> Vec<Book> {
        self.books(&parse_rows(text))
    }

    pub fn articles(&self, rows: &[Vec<String>]) -> Vec<Article> {
        let Some((header, body)) = rows.split_first() else {
            return Vec::new();
        };
        let cols = self.resolve(header, &ARTICLE_FIELDS);

        let articles: Vec<Article> = body
            .iter()
            .map(|row| Article {
                title: cell(row, cols[0]).to_string(),
                author: cell(row, cols[1]).to_string(),
                publication: cell(row, cols[2]).to_string(),
                date: cell(row, cols[3]).to_string(),
                url: optional(row, cols[4]),
            })
            .collect();

        log::debug!("Mapped {} articles", articles.len());
        articles
    }

    pub fn books(&self, rows: &[Vec<String>]) -> Vec<Book> {
        let Some((header, body)) = rows.split_first() else {
            return Vec::new();
        };
        let cols = self.resolve(header, &BOOK_FIELDS);

        let books: Vec<Book> = body
            .iter()
            .map(|row| {
                let eoy = rating(row, cols[5]);
                Book {
                    title: cell(row, cols[0]).to_string(),
                    author: cell(row, cols[1]).to_string(),
                    published_year: cell(row, cols[2]).to_string(),
                    year_read: cell(row, cols[3]).to_string(),
                    rating_first: rating(row, cols[4]),
                    rating_eoy: (!eoy.is_zero()).then_some(eoy),
                    external_rating: rating(row, cols[6]),
                    quote: optional(row, cols[7]),
                    url: optional(row, cols[8]),
                }
            })
            .collect();

        log::debug!("Mapped {} books", books.len());
        books
    }

    /// Column index for each field under the configured layout.
    fn resolve(&self, header: &[String], fields: &[Field]) -> Vec<usize> {
        match self.layout {
            ColumnLayout::Position => fields.iter().map(|f| f.position).collect(),
            ColumnLayout::Header => {
                let keys: Vec<String> = header.iter().map(|h| header_key(h)).collect();
                let bound: Vec<Option<usize>> = fields
                    .iter()
                    .map(|field| keys.iter().position(|key| field.names.contains(&key.as_str())))
                    .collect();

                fields
                    .iter()
                    .zip(&bound)
                    .map(|(field, found)| match found {
                        Some(index) => *index,
                        None if bound.contains(&Some(field.position)) => {
                            log::debug!(
                                "No header for {:?}; column {} belongs to another field",
                                field.names[0],
                                field.position
                            );
                            UNBOUND
                        }
                        None => {
                            log::debug!(
                                "No header for {:?}; using column {}",
                                field.names[0],
                                field.position
                            );
                            field.position
                        }
                    })
                    .collect()
            }
        }
    }
}

/// Lowercase alphanumerics only, so "Year Read" and "year_read" agree.
fn header_key(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn optional(row: &[String], index: usize) -> Option<String> {
    let value = cell(row, index);
    (!value.is_empty()).then(|| value.to_string())
}

fn rating(row: &[String], index: usize) -> Rating {
    parse_leading_float(cell(row, index))
        .map(Rating::new)
        .unwrap_or(Rating::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLES: &str = "\
Title,Author,Publication,Date,URL
The Case for Slow Reading,\"Doe, Jane\",The Atlantic,March 2024,https://example.com/slow
Untitled Draft,Anon,Zine,,
";

    const BOOKS: &str = "\
Title,Author,PublishedYear,YearRead,RatingFirst,RatingEOY,GoodreadsRating,Quote
Middlemarch,George Eliot,1871,2024,4.5,5,4.0,\"It is a narrow mind, they say\"
The Road,Cormac McCarthy,2006,2023,3,0,3.98
Broken Row,,unknown,2024,lots,,
";

    #[test]
    fn test_articles_positional() {
        let articles = RecordMapper::default().parse_articles(ARTICLES);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].author, "Doe, Jane");
        assert_eq!(articles[0].url.as_deref(), Some("https://example.com/slow"));
        assert_eq!(articles[1].date, "");
        assert_eq!(articles[1].url, None);
    }

    #[test]
    fn test_books_positional() {
        let books = RecordMapper::default().parse_books(BOOKS);
        assert_eq!(books.len(), 3);

        assert_eq!(books[0].rating_first, Rating::new(4.5));
        assert_eq!(books[0].rating_eoy, Some(Rating::new(5.0)));
        assert_eq!(books[0].quote.as_deref(), Some("It is a narrow mind, they say"));

        assert_eq!(books[1].rating_eoy, None);
        assert_eq!(books[1].external_rating, Rating::new(4.0));
        assert_eq!(books[1].quote, None);
    }

    #[test]
    fn test_malformed_row_is_coerced_not_dropped() {
        let books = RecordMapper::default().parse_books(BOOKS);
        let broken = &books[2];
        assert_eq!(broken.title, "Broken Row");
        assert_eq!(broken.author, "");
        assert_eq!(broken.rating_first, Rating::ZERO);
        assert_eq!(broken.decade(), None);
    }

    #[test]
    fn test_header_only_or_empty_input() {
        let mapper = RecordMapper::default();
        assert!(mapper.parse_books("").is_empty());
        assert!(mapper.parse_books("Title,Author\n").is_empty());
    }

    #[test]
    fn test_header_layout_survives_reordered_columns() {
        let text = "\
Author,Title,Year Read,Published Year,Rating EOY,Rating First
Ursula K. Le Guin,The Dispossessed,2022,1974,,4
";
        let books = RecordMapper::new(ColumnLayout::Header).parse_books(text);
        assert_eq!(books[0].title, "The Dispossessed");
        assert_eq!(books[0].author, "Ursula K. Le Guin");
        assert_eq!(books[0].published_year, "1974");
        assert_eq!(books[0].rating_first, Rating::new(4.0));
        assert_eq!(books[0].rating_eoy, None);

        let positional = RecordMapper::new(ColumnLayout::Position).parse_books(text);
        assert_eq!(positional[0].title, "Ursula K. Le Guin");
    }

    #[test]
    fn test_header_layout_never_reuses_a_claimed_column() {
        let text = "\
Title,Author,Quote
Dune,Frank Herbert,Fear is the mind-killer
";
        let books = RecordMapper::new(ColumnLayout::Header).parse_books(text);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].quote.as_deref(), Some("Fear is the mind-killer"));
        assert_eq!(books[0].published_year, "");
        assert_eq!(books[0].decade(), None);
        assert_eq!(books[0].year_read, "");
    }

    #[test]
    fn test_header_key_normalization() {
        assert_eq!(header_key("Year_Read"), "yearread");
        assert_eq!(header_key(" Goodreads Rating "), "goodreadsrating");
    }
}
