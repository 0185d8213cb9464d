// src/services/csv.rs

//! CSV tokenizer and writer.
//!
//! The tokenizer never fails: it accepts anything a person might save from a
//! spreadsheet and turns it into rows of trimmed string fields.
//!
//! - `,` separates fields, `\n` or `\r\n` separates records
//! - `"` opens a quoted section; `""` inside it is a literal quote
//! - an unterminated quote is closed by end of input
//! - rows whose fields are all empty are dropped

/// Split `text` into rows of fields.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => row.push(take_field(&mut field)),
            '\n' => finish_row(&mut rows, &mut row, &mut field),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                finish_row(&mut rows, &mut row, &mut field);
            }
            _ => field.push(ch),
        }
    }

    finish_row(&mut rows, &mut row, &mut field);
    rows
}

fn take_field(field: &mut String) -> String {
    let value = field.trim().to_string();
    field.clear();
    value
}

fn finish_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, field: &mut String) {
    row.push(take_field(field));
    let done = std::mem::take(row);
    if done.iter().any(|cell| !cell.is_empty()) {
        rows.push(done);
    }
}

/// Serialize rows back to CSV text, one record per line.
pub fn write_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .map(|field| quote_field(field.as_ref()))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_quoted_comma_stays_in_field() {
        assert_eq!(parse_rows("\"Smith, Jane\",2020"), vec![row(&["Smith, Jane", "2020"])]);
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(
            parse_rows(r#""She said ""hi""""#),
            vec![row(&[r#"She said "hi""#])]
        );
    }

    #[test]
    fn test_trailing_blank_line_dropped() {
        let rows = parse_rows("Title,Author\nDune,Herbert\n\n");
        assert_eq!(rows, vec![row(&["Title", "Author"]), row(&["Dune", "Herbert"])]);
    }

    #[test]
    fn test_crlf_and_empty_rows() {
        let rows = parse_rows("a,b\r\n,\r\nc,d\r\n");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn test_embedded_newline_in_quotes() {
        let rows = parse_rows("\"line one\nline two\",x\ny,z");
        assert_eq!(rows, vec![row(&["line one\nline two", "x"]), row(&["y", "z"])]);
    }

    #[test]
    fn test_unterminated_quote_closes_at_end() {
        assert_eq!(parse_rows("a,\"never closed, really"), vec![row(&["a", "never closed, really"])]);
    }

    #[test]
    fn test_fields_are_trimmed_and_short_rows_kept() {
        assert_eq!(parse_rows("  a ,b  \nonly"), vec![row(&["a", "b"]), row(&["only"])]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("\n\r\n").is_empty());
    }

    #[test]
    fn test_write_then_parse_round_trips() {
        let rows = vec![
            row(&["Title", "Author", "Quote"]),
            row(&["Middlemarch", "Eliot, George", r#"a "quiet" book"#]),
            row(&["Beloved", "Toni Morrison", ""]),
        ];
        assert_eq!(parse_rows(&write_rows(&rows)), rows);
    }

    #[test]
    fn test_write_quotes_only_when_needed() {
        assert_eq!(write_rows(&[vec!["plain", "a,b", "say \"x\""]]), "plain,\"a,b\",\"say \"\"x\"\"\"\n");
    }
}
