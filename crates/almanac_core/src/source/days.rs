//! Day enumeration.

use crate::model::day::DayLabel;
use chrono::{Datelike, NaiveDate};

const LEAP_REFERENCE_YEAR: i32 = 2020;

/// Every day label of a leap year, `January_1` through `December_31`.
pub fn all_day_labels() -> Vec<DayLabel> {
    NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, 1, 1)
        .into_iter()
        .flat_map(|start| start.iter_days())
        .take_while(|date| date.year() == LEAP_REFERENCE_YEAR)
        .filter_map(|date| DayLabel::new(date.month(), date.day()).ok())
        .collect()
}
