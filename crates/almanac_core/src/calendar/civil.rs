//! Assembly of `(YearToken, DayLabel)` into a `NormalizedDate`.

use super::julian::gregorian_to_julian_day;
use crate::model::day::DayLabel;
use crate::model::record::{NormalizedDate, YearToken};
use chrono::NaiveDate;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How a BC year is mapped before Julian day conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BcYearShift {
    /// `45 BC` converts as year -45, one year off astronomical numbering.
    NegateOnly,
    /// `45 BC` converts as year -44 (astronomical year numbering).
    #[default]
    Astronomical,
}

/// The parsed year and the page's month/day do not form a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateConstructionError {
    pub canonical_year: String,
    pub is_bc: bool,
    pub month: u32,
    pub day: u32,
}

impl Display for DateConstructionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no calendar date for year {}{} month {} day {}",
            self.canonical_year,
            if self.is_bc { " BC" } else { "" },
            self.month,
            self.day
        )
    }
}

impl Error for DateConstructionError {}

/// Combines a year token with a page day into a validated date.
///
/// Validity is checked on the unsigned year under proleptic Gregorian rules,
/// so `February_29` only assembles for leap years. Year `0000` never forms a
/// date. BC years come out negative; `shift` only affects the Julian day.
pub fn assemble_date(
    token: &YearToken,
    day: &DayLabel,
    shift: BcYearShift,
) -> Result<NormalizedDate, DateConstructionError> {
    let unsigned_year = token.year_number();
    let invalid = || DateConstructionError {
        canonical_year: token.canonical_year.clone(),
        is_bc: token.is_bc,
        month: day.month(),
        day: day.day(),
    };

    if unsigned_year == 0 {
        return Err(invalid());
    }
    NaiveDate::from_ymd_opt(unsigned_year, day.month(), day.day()).ok_or_else(invalid)?;

    let year = if token.is_bc {
        -unsigned_year
    } else {
        unsigned_year
    };
    let conversion_year = match shift {
        BcYearShift::Astronomical if token.is_bc => year + 1,
        _ => year,
    };

    Ok(NormalizedDate {
        year,
        month: day.month(),
        day: day.day(),
        julian_day: gregorian_to_julian_day(conversion_year, day.month(), day.day()),
    })
}
