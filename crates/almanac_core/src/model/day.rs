//! Calendar-day label (`Month_Day`) shared by every record of one page.

use chrono::Month;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned when a day label is not in `MonthName_Day` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabelError {
    pub label: String,
    pub reason: &'static str,
}

impl Display for DayLabelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid day label `{}`: {}", self.label, self.reason)
    }
}

impl Error for DayLabelError {}

/// Month and day-of-month of one almanac page, e.g. `March_15`.
///
/// The day is only range-checked (1..=31) here. Whether it exists in the
/// month for a particular year is decided when a full date is assembled,
/// because `February_29` is valid for leap years only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayLabel {
    month: Month,
    day: u32,
}

impl DayLabel {
    /// Builds a label from a month number (1..=12) and a day (1..=31).
    pub fn new(month: u32, day: u32) -> Result<Self, DayLabelError> {
        let month = u8::try_from(month)
            .ok()
            .and_then(|value| Month::try_from(value).ok())
            .ok_or_else(|| DayLabelError {
                label: format!("{month}_{day}"),
                reason: "month must be 1..=12",
            })?;
        Self::from_parts(month, day)
    }

    /// Parses `MonthName_Day` (spaces are ignored, month names are matched
    /// case-insensitively).
    pub fn parse(label: &str) -> Result<Self, DayLabelError> {
        let cleaned = label.replace(' ', "");
        let invalid = |reason| DayLabelError {
            label: label.to_string(),
            reason,
        };

        let (month_name, day_text) = cleaned
            .split_once('_')
            .ok_or_else(|| invalid("expected `MonthName_Day`"))?;
        let month = month_name
            .parse::<Month>()
            .map_err(|_| invalid("unknown month name"))?;
        let day = day_text
            .parse::<u32>()
            .map_err(|_| invalid("day is not a number"))?;

        Self::from_parts(month, day).map_err(|err| invalid(err.reason))
    }

    fn from_parts(month: Month, day: u32) -> Result<Self, DayLabelError> {
        if !(1..=31).contains(&day) {
            return Err(DayLabelError {
                label: format!("{}_{day}", month.name()),
                reason: "day must be 1..=31",
            });
        }
        Ok(Self { month, day })
    }

    /// Month number, 1..=12.
    pub fn month(&self) -> u32 {
        self.month.number_from_month()
    }

    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Day of month, 1..=31.
    pub fn day(&self) -> u32 {
        self.day
    }
}

impl Display for DayLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.month.name(), self.day)
    }
}
