// src/render/html.rs

//! Standalone HTML page for the reading list.
//!
//! One table per tab. Titles link out when a URL was recorded, and books
//! with a quote get an inline `<details>` panel that starts open when it is
//! the expanded quote in the view state.

use chrono::{Datelike, Local};

use crate::models::{DisplayConfig, LoadState, ReadingList};
use crate::render::table::NOT_RERATED;
use crate::services::view::{ArticleRow, BookRow, Tab, ViewState, visible_articles, visible_books};
use crate::utils::text::escape_html;

/// Render the full page for the current load and view state.
pub fn render_page(load: &LoadState, state: &ViewState, display: &DisplayConfig) -> String {
    let title = escape_html(&display.title);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n<main>\n");

    html.push_str(&format!("<section class=\"header\">\n<h1>{title}</h1>\n"));
    html.push_str(&tab_switch(state.tab));
    html.push_str("</section>\n");

    html.push_str("<section class=\"content\">\n");
    match load.list() {
        None => html.push_str("<p class=\"loading\">Loading...</p>\n"),
        Some(list) => html.push_str(&content(list, state)),
    }
    html.push_str("</section>\n");

    let owner = escape_html(&display.owner);
    html.push_str(&format!(
        "<footer>&copy; {} {}</footer>\n",
        Local::now().year(),
        owner
    ));
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn tab_switch(active: Tab) -> String {
    let class = |tab: Tab| if tab == active { "tab active" } else { "tab" };
    format!(
        "<nav class=\"toggle\"><span class=\"{}\">Articles</span> <span class=\"{}\">Books</span></nav>\n",
        class(Tab::Articles),
        class(Tab::Books)
    )
}

fn content(list: &ReadingList, state: &ViewState) -> String {
    match state.tab {
        Tab::Articles => articles_table(&visible_articles(state, &list.articles)),
        Tab::Books => books_table(&visible_books(state, &list.books), state),
    }
}

fn linked_title(title: &str, url: Option<&str>) -> String {
    let title = escape_html(title);
    match url {
        Some(url) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{title}</a>",
            escape_html(url)
        ),
        None => title,
    }
}

fn empty_row(columns: usize) -> String {
    format!("<tr class=\"empty\"><td colspan=\"{columns}\">No entries match the current filters.</td></tr>\n")
}

fn articles_table(rows: &[ArticleRow<'_>]) -> String {
    let mut html = String::from("<table class=\"articles\">\n<thead>\n<tr>");
    html.push_str("<th>Title</th><th>Author</th><th>Publication</th><th>Date</th>");
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    if rows.is_empty() {
        html.push_str(&empty_row(4));
    }
    for row in rows {
        let article = row.article;
        html.push_str(&format!(
            "<tr data-index=\"{}\"><td>{}</td><td class=\"author\">{}</td><td>{}</td><td>{}</td></tr>\n",
            row.index,
            linked_title(&article.title, article.url.as_deref()),
            escape_html(&article.author),
            escape_html(&article.publication),
            escape_html(&article.date),
        ));
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

fn books_table(rows: &[BookRow<'_>], state: &ViewState) -> String {
    let mut html = String::new();
    if let Some(summary) = filter_summary(state) {
        html.push_str(&format!("<p class=\"filters\">{}</p>\n", escape_html(&summary)));
    }

    html.push_str("<table class=\"books\">\n<thead>\n<tr>");
    html.push_str(&format!(
        "<th>Title</th><th>Author</th><th>Published</th><th>Read</th><th>{}</th><th>Goodreads</th>",
        state.snapshot.label()
    ));
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    if rows.is_empty() {
        html.push_str(&empty_row(6));
    }
    for row in rows {
        let book = row.book;
        let rating = match row.shown_rating {
            Some(rating) => format!(
                "<span class=\"stars\" title=\"{rating}\">{}</span>",
                rating.stars()
            ),
            None => format!("<span class=\"placeholder\">{NOT_RERATED}</span>"),
        };
        html.push_str(&format!(
            "<tr data-index=\"{}\"><td>{}</td><td class=\"author\">{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row.index,
            linked_title(&book.title, book.url.as_deref()),
            escape_html(&book.author),
            escape_html(&book.published_year),
            escape_html(&book.year_read),
            rating,
            book.external_rating,
        ));

        if let Some(quote) = &book.quote {
            let open = if row.quote_expanded { " open" } else { "" };
            html.push_str(&format!(
                "<tr class=\"quote\"><td colspan=\"6\"><details{open}><summary>Quote</summary><blockquote>{}</blockquote></details></td></tr>\n",
                escape_html(quote).replace('\n', "<br>")
            ));
        }
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

/// One-line description of the active filters, if any.
fn filter_summary(state: &ViewState) -> Option<String> {
    let filters = &state.filters;
    if filters.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if let Some(author) = &filters.author {
        parts.push(format!("author: {author}"));
    }
    if let Some(decade) = filters.decade {
        parts.push(format!("decade: {decade}"));
    }
    if let Some(year) = &filters.year_read {
        parts.push(format!("read in: {year}"));
    }
    if let Some(stars) = filters.rating {
        parts.push(format!("rating: {stars}"));
    }
    Some(format!("Filtered by {}", parts.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, Book, Rating, Snapshot};
    use crate::services::Action;

    fn list() -> ReadingList {
        ReadingList {
            articles: vec![Article {
                title: "Tom & Jerry <reviewed>".to_string(),
                author: "Critic".to_string(),
                publication: "Weekly".to_string(),
                date: "2024".to_string(),
                url: Some("https://example.com/?a=1&b=2".to_string()),
            }],
            books: vec![
                Book {
                    title: "Middlemarch".to_string(),
                    author: "George Eliot".to_string(),
                    published_year: "1871".to_string(),
                    year_read: "2024".to_string(),
                    rating_first: Rating::new(4.5),
                    rating_eoy: None,
                    external_rating: Rating::new(4.0),
                    quote: Some("It is a narrow mind".to_string()),
                    url: None,
                },
                Book {
                    title: "The Road".to_string(),
                    author: "Cormac McCarthy".to_string(),
                    published_year: "2006".to_string(),
                    year_read: "2023".to_string(),
                    rating_first: Rating::new(3.0),
                    rating_eoy: Some(Rating::new(2.0)),
                    external_rating: Rating::new(4.0),
                    quote: None,
                    url: None,
                },
            ],
        }
    }

    #[test]
    fn test_loading_placeholder() {
        let page = render_page(&LoadState::Loading, &ViewState::default(), &DisplayConfig::default());
        assert!(page.contains("Loading..."));
        assert!(!page.contains("<table"));
    }

    #[test]
    fn test_page_lines_are_complete_elements() {
        let display = DisplayConfig {
            title: "Books & Essays".to_string(),
            ..DisplayConfig::default()
        };
        let state = ViewState::from_actions([Action::SelectTab(Tab::Books), Action::ToggleRating(5)]);
        let page = render_page(&LoadState::Ready(list()), &state, &display);
        let lines: Vec<&str> = page.lines().collect();

        assert!(lines.contains(&"<title>Books &amp; Essays</title>"));
        assert!(lines.contains(&"<h1>Books &amp; Essays</h1>"));
        assert!(lines.contains(&"<p class=\"filters\">Filtered by rating: 5</p>"));
        assert!(lines.iter().any(|l| l.starts_with("<footer>&copy; ") && l.ends_with("</footer>")));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn test_articles_are_escaped_and_linked() {
        let page = render_page(
            &LoadState::Ready(list()),
            &ViewState::default(),
            &DisplayConfig::default(),
        );
        assert!(page.contains("Tom &amp; Jerry &lt;reviewed&gt;"));
        assert!(page.contains("href=\"https://example.com/?a=1&amp;b=2\""));
        assert!(page.contains("<span class=\"tab active\">Articles</span>"));
    }

    #[test]
    fn test_books_tab_snapshot_and_quote_panel() {
        let state = ViewState::from_actions([
            Action::SelectTab(Tab::Books),
            Action::SetSnapshot(Snapshot::Eoy),
            Action::ToggleQuote(0),
        ]);
        let page = render_page(&LoadState::Ready(list()), &state, &DisplayConfig::default());

        assert!(page.contains("<th>At EOY</th>"));
        assert!(page.contains(NOT_RERATED));
        assert!(page.contains("<details open><summary>Quote</summary>"));
        assert!(page.contains("★★☆☆☆"));
    }

    #[test]
    fn test_filtered_to_nothing_shows_empty_row() {
        let state = ViewState::from_actions([
            Action::SelectTab(Tab::Books),
            Action::ToggleAuthor("Nobody".to_string()),
        ]);
        let page = render_page(&LoadState::Ready(list()), &state, &DisplayConfig::default());
        assert!(page.contains("No entries match the current filters."));
        assert!(page.contains("Filtered by author: Nobody"));
    }
}
