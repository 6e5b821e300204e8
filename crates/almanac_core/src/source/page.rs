//! Splitting a day page's plain text into provider sequences.

use super::{SourceError, SourceResult};
use crate::model::day::DayLabel;
use crate::model::record::OccurrenceType;

/// Header of the section that follows `Deaths` on every day page.
pub const HOLIDAYS_HEADER: &str = "Holidays and observances";

/// Provider sequences for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPage {
    pub day: DayLabel,
    pub events: Vec<String>,
    pub births: Vec<String>,
    pub deaths: Vec<String>,
}

impl DayPage {
    /// Sequences in `Event`, `Birth`, `Death` order.
    pub fn groups(&self) -> [(OccurrenceType, &[String]); 3] {
        [
            (OccurrenceType::Event, self.events.as_slice()),
            (OccurrenceType::Birth, self.births.as_slice()),
            (OccurrenceType::Death, self.deaths.as_slice()),
        ]
    }
}

/// Cuts a page into its three sections.
///
/// Each section runs from its header line (kept as the leading marker) up to,
/// but excluding, the line just before the next header; the day label is
/// appended as the trailing marker. Header lines must match exactly.
pub fn split_page(day: &DayLabel, text: &str) -> SourceResult<DayPage> {
    let lines: Vec<&str> = text.lines().collect();
    let find = |section: &'static str| {
        lines
            .iter()
            .position(|line| *line == section)
            .ok_or(SourceError::MissingSection { day: *day, section })
    };

    let events_at = find(OccurrenceType::Event.marker())?;
    let births_at = find(OccurrenceType::Birth.marker())?;
    let deaths_at = find(OccurrenceType::Death.marker())?;
    let holidays_at = find(HOLIDAYS_HEADER)?;

    let section = |start: usize, next_header: usize| {
        let end = next_header.saturating_sub(1).max(start + 1);
        let mut sequence: Vec<String> = lines[start..end]
            .iter()
            .map(|line| (*line).to_string())
            .collect();
        sequence.push(day.to_string());
        sequence
    };

    Ok(DayPage {
        day: *day,
        events: section(events_at, births_at),
        births: section(births_at, deaths_at),
        deaths: section(deaths_at, holidays_at),
    })
}
