// src/services/view.rs

//! Filter view state and derivation.
//!
//! All interaction goes through [`ViewState::update`], which consumes the
//! current state and an [`Action`] and returns the next state. The visible
//! rows are then derived from that state with [`visible_articles`] and
//! [`visible_books`]. Derivation never reorders: the result is always a
//! subsequence of the source list.

use serde::Serialize;

use crate::models::{Article, Book, Decade, Rating, Snapshot};

/// Which list is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Articles,
    Books,
}

/// Independent filter dimensions; `None` means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    pub author: Option<String>,
    pub decade: Option<Decade>,
    pub year_read: Option<String>,
    /// Whole-star bucket, 0..=5
    pub rating: Option<u8>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.author.is_none()
            && self.decade.is_none()
            && self.year_read.is_none()
            && self.rating.is_none()
    }

    /// Conjunction of the active predicates.
    pub fn matches_book(&self, book: &Book, snapshot: Snapshot) -> bool {
        if let Some(author) = &self.author {
            if book.author != *author {
                return false;
            }
        }
        if let Some(decade) = self.decade {
            // Unparsable years never match a decade.
            if book.decade() != Some(decade) {
                return false;
            }
        }
        if let Some(year) = &self.year_read {
            if book.year_read != *year {
                return false;
            }
        }
        if let Some(stars) = self.rating {
            if book.filter_rating(snapshot).whole_stars() != stars {
                return false;
            }
        }
        true
    }

    /// Articles only carry an author; the other dimensions do not apply.
    pub fn matches_article(&self, article: &Article) -> bool {
        self.author
            .as_ref()
            .is_none_or(|author| article.author == *author)
    }
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab(Tab),
    SetSnapshot(Snapshot),
    ToggleSnapshot,
    ToggleAuthor(String),
    ToggleDecade(Decade),
    ToggleYearRead(String),
    ToggleRating(u8),
    /// Open or close the quote panel of the book at this source index
    ToggleQuote(usize),
    ClearAll,
}

/// Complete UI state of the reading page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub tab: Tab,
    pub snapshot: Snapshot,
    pub filters: Filters,
    pub expanded_quote: Option<usize>,
}

impl ViewState {
    /// Apply one action and return the resulting state.
    #[must_use]
    pub fn update(mut self, action: Action) -> Self {
        match action {
            Action::SelectTab(tab) => {
                if tab != self.tab {
                    self.tab = tab;
                    self.expanded_quote = None;
                }
            }
            Action::SetSnapshot(snapshot) => self.snapshot = snapshot,
            Action::ToggleSnapshot => self.snapshot = self.snapshot.toggled(),
            Action::ToggleAuthor(author) => toggle(&mut self.filters.author, author),
            Action::ToggleDecade(decade) => toggle(&mut self.filters.decade, decade),
            Action::ToggleYearRead(year) => toggle(&mut self.filters.year_read, year),
            Action::ToggleRating(stars) => toggle(&mut self.filters.rating, stars.min(5)),
            Action::ToggleQuote(index) => toggle(&mut self.expanded_quote, index),
            Action::ClearAll => self.filters = Filters::default(),
        }
        self
    }

    /// Fold a sequence of actions into a state.
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        actions.into_iter().fold(Self::default(), Self::update)
    }
}

/// Unset -> Selected(v); Selected(v) -> Unset; Selected(u) -> Selected(v).
fn toggle<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

/// An article that passed the filters.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleRow<'a> {
    /// Position in the source file (header excluded)
    pub index: usize,
    #[serde(flatten)]
    pub article: &'a Article,
}

/// A book that passed the filters, with its snapshot-specific display values.
#[derive(Debug, Clone, Serialize)]
pub struct BookRow<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub book: &'a Book,
    /// Rating shown for the active snapshot; `None` renders as a placeholder
    pub shown_rating: Option<Rating>,
    pub quote_expanded: bool,
}

pub fn visible_articles<'a>(state: &ViewState, articles: &'a [Article]) -> Vec<ArticleRow<'a>> {
    articles
        .iter()
        .enumerate()
        .filter(|(_, article)| state.filters.matches_article(article))
        .map(|(index, article)| ArticleRow { index, article })
        .collect()
}

pub fn visible_books<'a>(state: &ViewState, books: &'a [Book]) -> Vec<BookRow<'a>> {
    books
        .iter()
        .enumerate()
        .filter(|(_, book)| state.filters.matches_book(book, state.snapshot))
        .map(|(index, book)| BookRow {
            index,
            book,
            shown_rating: book.displayed_rating(state.snapshot),
            quote_expanded: state.expanded_quote == Some(index) && book.quote.is_some(),
        })
        .collect()
}
