//! Escape-text utilities.
//!
//! Helpers for locating, splitting and tokenizing SGR escapes inside
//! literal text, plus visible width measurement that ignores escapes.

use chromastr_core::{ChromaError, Result};
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Regex pattern for a single SGR escape.
pub const SGR_ESCAPE: &str = r"\x1b\[[0-9;]*m";

/// Regex pattern for any escape sequence we know how to skip when
/// measuring text: CSI sequences, OSC sequences and charset selectors.
pub const ANY_ESCAPE: &str = r"\x1b(?:\[[0-9;?]*[a-zA-Z]|\][^\x07\x1b]*(?:\x07|\x1b\\)|[()][0-9A-Za-z])";

static SGR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(SGR_ESCAPE).unwrap());

static ANY_ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ANY_ESCAPE).unwrap());

static SGR_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(?:\x1b\[[0-9;]*m)+").unwrap());

static SGR_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(?:\x1b\[[0-9;]*m)*\z").unwrap());

/// Remove all escape sequences from text.
///
/// # Example
///
/// ```
/// use chromastr_ansi::utils::visible;
/// assert_eq!(visible("\x1b[1mBold\x1b[0m text"), "Bold text");
/// ```
pub fn visible(text: &str) -> String {
    ANY_ESCAPE_RE.replace_all(text, "").into_owned()
}

/// Display width of text in terminal columns, ignoring escapes.
///
/// ```
/// use chromastr_ansi::utils::visible_length;
/// assert_eq!(visible_length("\x1b[31mHello\x1b[0m"), 5);
/// assert_eq!(visible_length("你好"), 4);
/// ```
pub fn visible_length(text: &str) -> usize {
    visible(text).width()
}

/// Every SGR escape found in `text`, in order.
///
/// ```
/// use chromastr_ansi::utils::extract_sgr_codes;
/// assert_eq!(extract_sgr_codes("\x1b[1mBold\x1b[0m"), vec!["\x1b[1m", "\x1b[0m"]);
/// ```
pub fn extract_sgr_codes(text: &str) -> Vec<&str> {
    SGR_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split off the leading run of consecutive SGR escapes.
///
/// Returns `(escapes, rest)`; `escapes` is empty when `text` does not
/// start with an SGR escape.
///
/// ```
/// use chromastr_ansi::utils::split_sgr_prefix;
/// assert_eq!(split_sgr_prefix("\x1b[1m\x1b[31mhi"), ("\x1b[1m\x1b[31m", "hi"));
/// assert_eq!(split_sgr_prefix("plain"), ("", "plain"));
/// ```
pub fn split_sgr_prefix(text: &str) -> (&str, &str) {
    match SGR_PREFIX_RE.find(text) {
        Some(m) => text.split_at(m.end()),
        None => ("", text),
    }
}

/// Whether `s` consists only of SGR escapes (the empty string included).
pub fn is_sgr_run(s: &str) -> bool {
    SGR_ONLY_RE.is_match(s)
}

/// Whether `s` is exactly one SGR escape.
///
/// ```
/// use chromastr_ansi::utils::is_sgr;
/// assert!(is_sgr("\x1b[38;5;1m"));
/// assert!(!is_sgr("\x1b[2J"));
/// assert!(!is_sgr("hello"));
/// ```
pub fn is_sgr(s: &str) -> bool {
    SGR_RE.find(s).is_some_and(|m| m.start() == 0 && m.end() == s.len())
}

/// Tokenize SGR parameters.
///
/// Accepts either the bare parameter list (`"1;31"`) or a full escape
/// (`"\x1b[1;31m"`). An empty list yields no parameters; an empty field
/// between separators or a non-decimal field is a parse error.
///
/// ```
/// use chromastr_ansi::utils::parse_sgr_params;
/// assert_eq!(parse_sgr_params("\x1b[1;4m").unwrap(), vec![1, 4]);
/// assert_eq!(parse_sgr_params("").unwrap(), Vec::<u32>::new());
/// assert!(parse_sgr_params("1;;4").is_err());
/// ```
pub fn parse_sgr_params(code: &str) -> Result<Vec<u32>> {
    let inner = code.strip_prefix("\x1b[").unwrap_or(code);
    let inner = inner.strip_suffix('m').unwrap_or(inner);

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(';')
        .map(|field| {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ChromaError::Parse(format!(
                    "invalid SGR parameter {field:?} in {code:?}"
                )));
            }
            field.parse::<u32>().map_err(|e| {
                ChromaError::Parse(format!("SGR parameter {field:?} out of range: {e}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible() {
        assert_eq!(visible("\x1b[1mBold\x1b[0m"), "Bold");
        assert_eq!(visible("No codes"), "No codes");
        assert_eq!(visible("\x1b[38;2;255;0;0mRed\x1b[0m"), "Red");
        assert_eq!(visible("\x1b]0;title\x07x"), "x");
    }

    #[test]
    fn test_visible_length() {
        assert_eq!(visible_length("\x1b[1mHello\x1b[0m"), 5);
        assert_eq!(visible_length(""), 0);
    }

    #[test]
    fn test_extract_ignores_non_sgr() {
        let codes = extract_sgr_codes("\x1b[2J\x1b[1mBold\x1b[0m");
        assert_eq!(codes, vec!["\x1b[1m", "\x1b[0m"]);
    }

    #[test]
    fn test_split_sgr_prefix_stops_at_text() {
        let (prefix, rest) = split_sgr_prefix("\x1b[31mred\x1b[0m");
        assert_eq!(prefix, "\x1b[31m");
        assert_eq!(rest, "red\x1b[0m");
        assert_eq!(split_sgr_prefix("\x1b[m"), ("\x1b[m", ""));
    }

    #[test]
    fn test_is_sgr_run() {
        assert!(is_sgr_run(""));
        assert!(is_sgr_run("\x1b[1m\x1b[31m"));
        assert!(!is_sgr_run("\x1b[1mx"));
    }

    #[test]
    fn test_parse_sgr_params() {
        assert_eq!(parse_sgr_params("\x1b[1m").unwrap(), vec![1]);
        assert_eq!(
            parse_sgr_params("38;2;255;0;0").unwrap(),
            vec![38, 2, 255, 0, 0]
        );
        assert!(matches!(parse_sgr_params("1;"), Err(ChromaError::Parse(_))));
        assert!(matches!(parse_sgr_params("+1"), Err(ChromaError::Parse(_))));
        assert!(matches!(
            parse_sgr_params("99999999999"),
            Err(ChromaError::Parse(_))
        ));
    }
}
