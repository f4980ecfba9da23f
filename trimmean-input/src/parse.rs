//! Lenient Number Parsing
//!
//! Turns free text into numbers without ever failing. A token with no
//! numeric prefix becomes `f64::NAN`; rejecting it is left to validation.
//!
//! Prefix rules: leading whitespace is skipped, then an optional sign followed
//! by either `Infinity` or a decimal mantissa (`12`, `12.`, `12.5`, `.5`). An
//! exponent is consumed only when at least one exponent digit follows.
//! Anything after the prefix is ignored, so `"12abc"` is 12 and `"1e"` is 1.

use regex::Regex;
use std::sync::OnceLock;

fn delimiter_re() -> &'static Regex {
    static DELIMITER_RE: OnceLock<Regex> = OnceLock::new();
    // Safety: this regex literal is guaranteed to compile
    DELIMITER_RE.get_or_init(|| Regex::new(r"[,，\s]+").unwrap())
}

fn prefix_re() -> &'static Regex {
    static PREFIX_RE: OnceLock<Regex> = OnceLock::new();
    // Safety: this regex literal is guaranteed to compile
    PREFIX_RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .unwrap()
    })
}

/// Parse the longest numeric prefix of `text`, or `f64::NAN` if there is none.
pub fn parse_number_prefix(text: &str) -> f64 {
    let text = text.trim_start();
    prefix_re()
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Split `text` on commas, full-width commas and whitespace and parse every
/// non-empty token.
///
/// # Examples
///
/// ```
/// # use trimmean_input::parse_array;
/// assert_eq!(parse_array("1， 2 ,3"), vec![1.0, 2.0, 3.0]);
/// assert!(parse_array("1,x,3")[1].is_nan());
/// ```
pub fn parse_array(text: &str) -> Vec<f64> {
    delimiter_re()
        .split(text)
        .filter(|token| !token.is_empty())
        .map(parse_number_prefix)
        .collect()
}

/// Parse a single numeric field. Only empty text is `None`; blank text has
/// no numeric prefix and parses to `f64::NAN`.
pub fn parse_numeric_field(text: &str) -> Option<f64> {
    if text.is_empty() {
        None
    } else {
        Some(parse_number_prefix(text))
    }
}
