//! Raw line classification.
//!
//! A line is either discarded outright (blank lines, calendar-system
//! footnotes) or takes part in assembly. Lines that take part may open a new
//! dated entry or continue under the previously seen year.

/// Separator between a year expression and its description (` – `).
pub const ENTRY_SEPARATOR: &str = " \u{2013} ";

const ASCII_DASH_SEPARATOR: &str = " - ";

/// Outcome of [`classify_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Not a data line; skip it.
    Discard,
    /// Participates in record assembly, whether or not it opens an entry.
    Continuation,
}

/// Decides whether a raw line carries almanac data.
///
/// Discarded: lines that are blank after trimming, and lines whose first four
/// characters hold no digit while the line mentions `calendar` (e.g.
/// `Pre-Julian Roman calendar`). Any Unicode digit counts here.
pub fn classify_line(line: &str) -> LineClass {
    if line.trim().is_empty() {
        return LineClass::Discard;
    }
    let digit_in_prefix = line.chars().take(4).any(char::is_numeric);
    if !digit_in_prefix && line.contains("calendar") {
        return LineClass::Discard;
    }
    LineClass::Continuation
}

/// Rewrites the ASCII ` - ` separator to the canonical ` – `.
pub fn normalize_separator(line: &str) -> String {
    line.replace(ASCII_DASH_SEPARATOR, ENTRY_SEPARATOR)
}

/// Returns whether a line visibly starts with a year-like token.
///
/// True iff any of the first ten characters is a digit, or the first four
/// characters contain `AD`.
pub fn opens_entry(line: &str) -> bool {
    if line.chars().take(10).any(|ch| ch.is_ascii_digit()) {
        return true;
    }
    let prefix: String = line.chars().take(4).collect();
    prefix.contains("AD")
}
