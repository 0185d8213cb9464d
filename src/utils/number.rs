// src/utils/number.rs

//! Lenient numeric parsing for hand-edited CSV cells.
//!
//! Only a leading numeric prefix is read, so `"4.5 stars"` is 4.5 and
//! `"1994 (rev. 2001)"` is 1994; anything without one yields `None`.

use std::sync::OnceLock;

use regex::Regex;

fn float_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)").expect("float prefix regex is valid")
    })
}

fn int_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d+").expect("int prefix regex is valid"))
}

/// Parse the leading decimal number of `text`, ignoring surrounding whitespace.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let m = float_prefix().find(text.trim())?;
    m.as_str().parse().ok()
}

/// Parse the leading integer of `text`, ignoring surrounding whitespace.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let m = int_prefix().find(text.trim())?;
    m.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("4.5"), Some(4.5));
        assert_eq!(parse_leading_float(" 3 "), Some(3.0));
        assert_eq!(parse_leading_float("4.5 stars"), Some(4.5));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("-1"), Some(-1.0));
        assert_eq!(parse_leading_float("n/a"), None);
        assert_eq!(parse_leading_float(""), None);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("1994"), Some(1994));
        assert_eq!(parse_leading_int("1994 (rev. 2001)"), Some(1994));
        assert_eq!(parse_leading_int("-380"), Some(-380));
        assert_eq!(parse_leading_int("c. 1850"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), None);
    }
}
