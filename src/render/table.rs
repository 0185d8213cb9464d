// src/render/table.rs

//! Aligned plain-text tables for terminal output.

use crate::models::Snapshot;
use crate::services::view::{ArticleRow, BookRow};
use crate::utils::text::{display_len, normalize_whitespace, truncate_text};

/// Text shown in place of a missing end-of-year rating.
pub const NOT_RERATED: &str = "not re-rated";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_len(cell))
                .max()
                .unwrap_or(0)
                .max(display_len(header))
        })
        .collect();

    fit_widths(&mut widths, options.max_width);

    let format_line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| pad(&truncate_text(cell, *width), *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_line = format_line(headers.iter().map(|h| h.to_string()).collect());
    let divider = "-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2);

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let cells = (0..widths.len())
            .map(|index| row.get(index).cloned().unwrap_or_default())
            .collect();
        lines.push(format_line(cells));
    }
    lines.join("\n")
}

/// Shrink the widest columns until the table fits in `max_width`.
fn fit_widths(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let budget = max_width.saturating_sub(separators);

    while widths.iter().sum::<usize>() > budget {
        let Some((index, widest)) = widths
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|(_, width)| *width)
        else {
            return;
        };
        if widest <= 4 {
            return;
        }
        widths[index] -= 1;
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_len(text));
    format!("{text}{}", " ".repeat(fill))
}

pub fn article_table(rows: &[ArticleRow<'_>], options: TableOptions) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                normalize_whitespace(&row.article.title),
                row.article.author.clone(),
                row.article.publication.clone(),
                row.article.date.clone(),
            ]
        })
        .collect();
    render_table(&["Title", "Author", "Publication", "Date"], &cells, options)
}

pub fn book_table(rows: &[BookRow<'_>], snapshot: Snapshot, options: TableOptions) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let rating = row
                .shown_rating
                .map(|r| r.stars())
                .unwrap_or_else(|| NOT_RERATED.to_string());
            vec![
                normalize_whitespace(&row.book.title),
                row.book.author.clone(),
                row.book.published_year.clone(),
                row.book.year_read.clone(),
                rating,
            ]
        })
        .collect();
    render_table(
        &["Title", "Author", "Published", "Read", snapshot.label()],
        &cells,
        options,
    )
}
