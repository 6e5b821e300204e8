//! Year expression normalization (`45 BC`, `AD 98`, `1999 (1998)`, `984`).

use crate::model::record::{YearAmbiguity, YearToken};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("valid non-digit regex"));

const CANONICAL_WIDTH: usize = 4;

/// Parses a year expression into a four digit canonical year and BC flag.
///
/// `BC` anywhere in the expression sets the flag; `AD` is ordinary noise.
/// Every non-digit is dropped, short years are left padded with zeros and
/// runs of five or more digits keep only the leftmost four, so
/// `"1425 (or 1426)"` normalizes to `1425`. An expression without digits
/// yields `0000`. Both fallbacks are reported through `ambiguity`.
pub fn parse_year(expr: &str) -> YearToken {
    let is_bc = expr.contains("BC");
    let digits = NON_DIGIT_RE.replace_all(expr, "");

    let (canonical_year, ambiguity) = match digits.len() {
        0 => ("0".repeat(CANONICAL_WIDTH), Some(YearAmbiguity::NoDigits)),
        len if len <= CANONICAL_WIDTH => (format!("{digits:0>4}"), None),
        _ => (
            digits[..CANONICAL_WIDTH].to_string(),
            Some(YearAmbiguity::Truncated {
                digits: digits.to_string(),
            }),
        ),
    };

    YearToken {
        canonical_year,
        is_bc,
        ambiguity,
    }
}
