//! # Text Normalization

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_RE: Regex =
        Regex::new(r"https?://\S+|www\.\S+").expect("regex pattern compilation failed");
    static ref DIGIT_RE: Regex = Regex::new(r"\d+").expect("regex pattern compilation failed");
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").expect("regex pattern compilation failed");
}

/// Normalize raw text ahead of corpus building and encoding.
///
/// Strips URLs and digit runs, collapses every whitespace run to a single
/// space, and trims the ends. Case, punctuation, and angle-bracket content
/// pass through untouched.
pub fn clean(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = DIGIT_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_urls() {
        assert_eq!(clean("see https://example.com/a?b=c now"), "see now");
        assert_eq!(clean("see www.example.com now"), "see now");
    }

    #[test]
    fn test_strips_digit_runs() {
        assert_eq!(clean("room 101 floor 3"), "room floor");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean("  a\t\tb \n c  "), "a b c");
    }

    #[test]
    fn test_preserves_case_punctuation_and_angle_brackets() {
        assert_eq!(clean("Hello, World! <tag>"), "Hello, World! <tag>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t "), "");
        assert_eq!(clean("42 1999"), "");
    }
}
