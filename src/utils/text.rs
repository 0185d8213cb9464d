// src/utils/text.rs

//! Text helpers shared by the renderers.

use unicode_segmentation::UnicodeSegmentation;

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Number of user-perceived characters in `text`.
pub fn display_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Truncate to at most `width` graphemes, marking the cut with `…`.
pub fn truncate_text(text: &str, width: usize) -> String {
    if display_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.graphemes(true).take(width - 1).collect();
    out.push('…');
    out
}

/// Collapse runs of whitespace (including newlines from quoted cells) to one space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_truncate_counts_graphemes() {
        assert_eq!(truncate_text("café society", 4), "caf…");
        assert_eq!(truncate_text("★★★☆☆", 5), "★★★☆☆");
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("anything", 0), "");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  line one\nline   two "), "line one line two");
    }
}
