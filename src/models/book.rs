// src/models/book.rs

//! Book records and the rating/decade value types they carry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{AppError, Result};
use crate::utils::number::parse_leading_int;

/// A star rating on a 0–5 scale with half-point granularity.
///
/// Stored as half-star units so that every value is already clamped and
/// rounded; the only way in is through [`Rating::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "f64")]
pub struct Rating(u8);

impl Rating {
    pub const ZERO: Rating = Rating(0);
    pub const MAX: Rating = Rating(10);

    /// Clamp to [0, 5] and round to the nearest half point.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        let clamped = value.clamp(0.0, 5.0);
        Self((clamped * 2.0).round() as u8)
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Nearest whole star, halves rounding up (2.5 -> 3).
    pub fn whole_stars(self) -> u8 {
        self.0.div_ceil(2)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Render as five glyphs: filled, an optional half, then empty.
    pub fn stars(self) -> String {
        let full = usize::from(self.0 / 2);
        let half = usize::from(self.0 % 2);
        let empty = 5 - full - half;
        format!("{}{}{}", "★".repeat(full), "½".repeat(half), "☆".repeat(empty))
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

/// Which of a book's two recorded ratings is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Snapshot {
    /// Rating given right after finishing the book
    #[default]
    First,
    /// Rating revisited at the end of the year
    Eoy,
}

impl Snapshot {
    pub fn toggled(self) -> Self {
        match self {
            Snapshot::First => Snapshot::Eoy,
            Snapshot::Eoy => Snapshot::First,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Snapshot::First => "At First Read",
            Snapshot::Eoy => "At EOY",
        }
    }
}

impl FromStr for Snapshot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "first" | "first-read" | "initial" => Ok(Snapshot::First),
            "eoy" | "end-of-year" => Ok(Snapshot::Eoy),
            other => Err(AppError::validation(format!(
                "unknown rating snapshot '{other}' (expected 'first' or 'eoy')"
            ))),
        }
    }
}

/// A publication decade, identified by its first year (1987 -> 1980).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decade(i32);

impl Decade {
    /// `None` when the decade's first year does not fit in an `i32`.
    pub fn of_year(year: i32) -> Option<Self> {
        year.div_euclid(10).checked_mul(10).map(Self)
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl FromStr for Decade {
    type Err = AppError;

    /// Accepts `"1990s"`, `"1990's"` or any year inside the decade.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix("'s")
            .or_else(|| trimmed.strip_suffix('s'))
            .unwrap_or(trimmed);
        digits
            .parse::<i32>()
            .ok()
            .and_then(Decade::of_year)
            .ok_or_else(|| AppError::validation(format!("invalid decade '{trimmed}'")))
    }
}

impl Serialize for Decade {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A book from `books.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,

    /// Free text; parsed on demand for decade grouping
    pub published_year: String,

    /// Free text, matched verbatim by the year-read filter
    pub year_read: String,

    pub rating_first: Rating,

    /// `None` when the book was not re-rated at the end of the year
    pub rating_eoy: Option<Rating>,

    /// Community rating (Goodreads)
    pub external_rating: Rating,

    pub quote: Option<String>,
    pub url: Option<String>,
}

impl Book {
    /// Publication year, if the text starts with an integer.
    pub fn published_year_value(&self) -> Option<i32> {
        parse_leading_int(&self.published_year).and_then(|y| i32::try_from(y).ok())
    }

    pub fn decade(&self) -> Option<Decade> {
        self.published_year_value().and_then(Decade::of_year)
    }

    /// Rating shown for the snapshot; `None` means "not re-rated".
    pub fn displayed_rating(&self, snapshot: Snapshot) -> Option<Rating> {
        match snapshot {
            Snapshot::First => Some(self.rating_first),
            Snapshot::Eoy => self.rating_eoy,
        }
    }

    /// Rating used for bucket matching: end-of-year falls back to first read.
    pub fn filter_rating(&self, snapshot: Snapshot) -> Rating {
        self.displayed_rating(snapshot).unwrap_or(self.rating_first)
    }
}
