//! Normalized record model.
//!
//! # Responsibility
//! - Represent parsed year tokens, assembled dates and the per-type record
//!   shapes handed to persistence.
//!
//! # Invariants
//! - `YearToken::canonical_year` is exactly four ASCII digits.
//! - `NormalizedDate::year` is negative iff the entry is BC; year 0 never
//!   appears.
//! - `NormalizedRecord` shape is decided by `OccurrenceType`.

use serde::{Deserialize, Serialize};

/// Description given to a year-bearing line without a ` – ` separator.
///
/// Such lines are section headers (`Pre-1600`, `1601–1900`); the sink's
/// cleanup step removes the records built from them.
pub const PLACEHOLDER_DESCRIPTION: &str = "dummy";

/// Almanac section an entry belongs to. Determines the record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceType {
    Event,
    Birth,
    Death,
}

impl OccurrenceType {
    pub const ALL: [OccurrenceType; 3] = [Self::Event, Self::Birth, Self::Death];

    /// Section header used by almanac pages and provider sequences.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Event => "Events",
            Self::Birth => "Births",
            Self::Death => "Deaths",
        }
    }

    /// Resolves a section header back to its occurrence type.
    pub fn from_marker(value: &str) -> Option<Self> {
        match value.trim() {
            "Events" => Some(Self::Event),
            "Births" => Some(Self::Birth),
            "Deaths" => Some(Self::Death),
            _ => None,
        }
    }
}

/// Why a parsed year needed a fallback normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearAmbiguity {
    /// The year expression held no digits at all; normalized to `0000`.
    NoDigits,
    /// Five or more digits were found; only the first four were kept.
    Truncated { digits: String },
}

/// Canonical year parsed from a year expression such as `45 BC` or `AD 98`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearToken {
    /// Exactly four ASCII digits, zero padded.
    pub canonical_year: String,
    pub is_bc: bool,
    /// Set when the expression was normalized through a fallback rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambiguity: Option<YearAmbiguity>,
}

impl YearToken {
    /// Numeric value of `canonical_year`, always non-negative.
    ///
    /// Non-digit characters are skipped and the value saturates at
    /// `i32::MAX`, so hand-built tokens never panic.
    pub fn year_number(&self) -> i32 {
        self.canonical_year
            .chars()
            .filter_map(|ch| ch.to_digit(10))
            .fold(0_i32, |acc, digit| {
                acc.saturating_mul(10).saturating_add(digit as i32)
            })
    }
}

/// Fully assembled calendar position of one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDate {
    /// Negative for BC years.
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Fractional Julian day number (half-integer, midnight based).
    pub julian_day: f64,
}

impl NormalizedDate {
    /// Integer storage form `YYYYMMDD`, negated for BC dates.
    ///
    /// `-0044-03-15` is stored as `-440315`.
    pub fn storage_key(&self) -> i64 {
        let magnitude = i64::from(self.year.unsigned_abs()) * 10_000
            + i64::from(self.month) * 100
            + i64::from(self.day);
        if self.year < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Sign-prefixed four digit year, e.g. `-0044` or `1999`.
    pub fn display_year(&self) -> String {
        if self.year < 0 {
            format!("-{:04}", self.year.unsigned_abs())
        } else {
            format!("{:04}", self.year)
        }
    }

    /// Inverse of [`NormalizedDate::storage_key`] paired with a stored Julian
    /// day. Returns `None` when the key does not decode into a plausible date.
    pub fn from_storage(key: i64, julian_day: f64) -> Option<Self> {
        let magnitude = key.unsigned_abs();
        let year = i32::try_from(magnitude / 10_000).ok()?;
        let month = u32::try_from(magnitude / 100 % 100).ok()?;
        let day = u32::try_from(magnitude % 100).ok()?;
        if year == 0 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self {
            year: if key < 0 { -year } else { year },
            month,
            day,
            julian_day,
        })
    }
}

/// One normalized almanac entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizedRecord {
    Event {
        date: NormalizedDate,
        description: String,
    },
    Birth {
        date: NormalizedDate,
        name: String,
        description: String,
    },
    Death {
        date: NormalizedDate,
        name: String,
        description: String,
    },
}

impl NormalizedRecord {
    pub fn kind(&self) -> OccurrenceType {
        match self {
            Self::Event { .. } => OccurrenceType::Event,
            Self::Birth { .. } => OccurrenceType::Birth,
            Self::Death { .. } => OccurrenceType::Death,
        }
    }

    pub fn date(&self) -> &NormalizedDate {
        match self {
            Self::Event { date, .. } | Self::Birth { date, .. } | Self::Death { date, .. } => date,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Event { description, .. }
            | Self::Birth { description, .. }
            | Self::Death { description, .. } => description,
        }
    }

    /// Person name for births and deaths; `None` for events.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Event { .. } => None,
            Self::Birth { name, .. } | Self::Death { name, .. } => Some(name),
        }
    }
}
