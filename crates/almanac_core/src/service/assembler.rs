//! Record assembly for one (day, occurrence type) group.
//!
//! # Responsibility
//! - Turn an ordered raw line sequence into ordered `NormalizedRecord`s.
//! - Carry the last seen year forward to lines that omit one.
//!
//! # Invariants
//! - Carry-forward state lives in a fresh `GroupState` per group and is never
//!   shared across groups.
//! - Output order equals input order.
//! - A failed date on one line never aborts the group; a line that needs a
//!   carried year before any year was seen does, unless configured to skip.

use crate::calendar::{assemble_date, BcYearShift, DateConstructionError};
use crate::model::day::{DayLabel, DayLabelError};
use crate::model::record::{
    NormalizedDate, NormalizedRecord, OccurrenceType, YearAmbiguity, YearToken,
    PLACEHOLDER_DESCRIPTION,
};
use crate::parse::{
    classify_line, normalize_separator, opens_entry, parse_year, split_subject, LineClass,
    ENTRY_SEPARATOR,
};
use log::{debug, warn};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// What to do with a non-opening line seen before any year in its group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanLinePolicy {
    /// Fail the whole group with `AssembleError::MalformedGroup`.
    #[default]
    AbortGroup,
    /// Report the line as a `LineError::MissingYear` failure and continue.
    SkipLine,
}

/// Assembler behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssemblerOptions {
    pub bc_shift: BcYearShift,
    pub orphan_lines: OrphanLinePolicy,
}

/// Group-fatal assembly error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    InvalidDayLabel(DayLabelError),
    /// Provider sequence lacks the leading type marker or trailing day label.
    MissingGroupMarkers,
    UnknownOccurrenceMarker(String),
    /// A line needed a carried year before any year was established.
    MalformedGroup { line_index: usize, line: String },
}

impl Display for AssembleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDayLabel(err) => write!(f, "{err}"),
            Self::MissingGroupMarkers => write!(
                f,
                "group sequence must start with a type marker and end with a day label"
            ),
            Self::UnknownOccurrenceMarker(marker) => {
                write!(f, "unknown occurrence marker `{marker}`")
            }
            Self::MalformedGroup { line_index, line } => write!(
                f,
                "line {line_index} has no year and none was seen before it: `{line}`"
            ),
        }
    }
}

impl Error for AssembleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDayLabel(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DayLabelError> for AssembleError {
    fn from(value: DayLabelError) -> Self {
        Self::InvalidDayLabel(value)
    }
}

/// Per-line failure that was isolated from the rest of the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    DateConstruction(DateConstructionError),
    /// Only produced under `OrphanLinePolicy::SkipLine`.
    MissingYear,
}

impl Display for LineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateConstruction(err) => write!(f, "{err}"),
            Self::MissingYear => write!(f, "no year established before this line"),
        }
    }
}

impl Error for LineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DateConstruction(err) => Some(err),
            Self::MissingYear => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// Position in the data-line sequence (markers excluded).
    pub line_index: usize,
    pub line: String,
    pub error: LineError,
}

/// Result of assembling one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOutcome {
    pub kind: OccurrenceType,
    pub day: DayLabel,
    pub records: Vec<NormalizedRecord>,
    pub line_failures: Vec<LineFailure>,
    /// Number of parsed year expressions that needed a fallback rule.
    pub ambiguous_years: usize,
}

/// Carry-forward accumulator threaded through one group's lines.
#[derive(Debug, Default)]
struct GroupState {
    last_year: Option<YearToken>,
}

enum LineStep {
    Record(NormalizedRecord),
    Failed(LineError),
}

/// Stateless record assembler; all per-group state is local to each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordAssembler {
    options: AssemblerOptions,
}

impl RecordAssembler {
    pub fn new(options: AssemblerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> AssemblerOptions {
        self.options
    }

    /// Assembles a provider sequence: `[type marker, data lines..., day label]`.
    pub fn assemble_sequence<S: AsRef<str>>(
        &self,
        sequence: &[S],
    ) -> Result<GroupOutcome, AssembleError> {
        let (marker, rest) = sequence
            .split_first()
            .ok_or(AssembleError::MissingGroupMarkers)?;
        let (label, lines) = rest
            .split_last()
            .ok_or(AssembleError::MissingGroupMarkers)?;

        let kind = OccurrenceType::from_marker(marker.as_ref())
            .ok_or_else(|| AssembleError::UnknownOccurrenceMarker(marker.as_ref().to_string()))?;
        let day = DayLabel::parse(label.as_ref())?;
        self.assemble(kind, &day, lines)
    }

    /// Assembles the data lines of one group, markers already removed.
    ///
    /// # Errors
    /// - `AssembleError::MalformedGroup` when a non-opening line precedes
    ///   every year and the orphan policy is `AbortGroup`.
    pub fn assemble<S: AsRef<str>>(
        &self,
        kind: OccurrenceType,
        day: &DayLabel,
        lines: &[S],
    ) -> Result<GroupOutcome, AssembleError> {
        let mut state = GroupState::default();
        let mut outcome = GroupOutcome {
            kind,
            day: *day,
            records: Vec::with_capacity(lines.len()),
            line_failures: Vec::new(),
            ambiguous_years: 0,
        };

        for (line_index, raw) in lines.iter().enumerate() {
            let raw = raw.as_ref();
            if classify_line(raw) == LineClass::Discard {
                continue;
            }

            match self.step(&mut state, &mut outcome, line_index, raw)? {
                LineStep::Record(record) => outcome.records.push(record),
                LineStep::Failed(error) => {
                    warn!(
                        "event=line_skipped module=assembler status=error day={} kind={} line_index={} error={}",
                        day,
                        kind.marker(),
                        line_index,
                        error
                    );
                    outcome.line_failures.push(LineFailure {
                        line_index,
                        line: raw.to_string(),
                        error,
                    });
                }
            }
        }

        debug!(
            "event=group_assembled module=assembler status=ok day={} kind={} records={} failures={} ambiguous_years={}",
            day,
            kind.marker(),
            outcome.records.len(),
            outcome.line_failures.len(),
            outcome.ambiguous_years
        );
        Ok(outcome)
    }

    fn step(
        &self,
        state: &mut GroupState,
        outcome: &mut GroupOutcome,
        line_index: usize,
        raw: &str,
    ) -> Result<LineStep, AssembleError> {
        let line = normalize_separator(raw);

        let (token, remainder) = if opens_entry(&line) {
            let (year_expr, remainder) = match line.split_once(ENTRY_SEPARATOR) {
                Some((year_expr, remainder)) => (year_expr, remainder),
                None => (line.as_str(), PLACEHOLDER_DESCRIPTION),
            };
            let token = parse_year(year_expr);
            if let Some(ambiguity) = &token.ambiguity {
                outcome.ambiguous_years += 1;
                log_ambiguous_year(&outcome.day, year_expr, &token, ambiguity);
            }
            state.last_year = Some(token.clone());
            (token, remainder.to_string())
        } else {
            match &state.last_year {
                Some(token) => (token.clone(), line.clone()),
                None => {
                    return match self.options.orphan_lines {
                        OrphanLinePolicy::AbortGroup => Err(AssembleError::MalformedGroup {
                            line_index,
                            line: raw.to_string(),
                        }),
                        OrphanLinePolicy::SkipLine => Ok(LineStep::Failed(LineError::MissingYear)),
                    };
                }
            }
        };

        let date = match assemble_date(&token, &outcome.day, self.options.bc_shift) {
            Ok(date) => date,
            Err(err) => return Ok(LineStep::Failed(LineError::DateConstruction(err))),
        };

        Ok(LineStep::Record(build_record(outcome.kind, date, remainder)))
    }
}

fn build_record(kind: OccurrenceType, date: NormalizedDate, remainder: String) -> NormalizedRecord {
    match kind {
        OccurrenceType::Event => NormalizedRecord::Event {
            date,
            description: remainder,
        },
        OccurrenceType::Birth => {
            let (name, description) = split_subject(&remainder);
            NormalizedRecord::Birth {
                date,
                name,
                description,
            }
        }
        OccurrenceType::Death => {
            let (name, description) = split_subject(&remainder);
            NormalizedRecord::Death {
                date,
                name,
                description,
            }
        }
    }
}

fn log_ambiguous_year(day: &DayLabel, year_expr: &str, token: &YearToken, ambiguity: &YearAmbiguity) {
    let reason = match ambiguity {
        YearAmbiguity::NoDigits => "no_digits",
        YearAmbiguity::Truncated { .. } => "truncated",
    };
    warn!(
        "event=ambiguous_year module=assembler status=warn day={} reason={} chars={} normalized={}",
        day,
        reason,
        year_expr.chars().count(),
        token.canonical_year
    );
}

#[cfg(test)]
mod tests {
    use super::{
        AssembleError, AssemblerOptions, LineError, OrphanLinePolicy, RecordAssembler,
        PLACEHOLDER_DESCRIPTION,
    };
    use crate::model::day::DayLabel;
    use crate::model::record::{NormalizedRecord, OccurrenceType};

    fn day(label: &str) -> DayLabel {
        DayLabel::parse(label).expect("test label should parse")
    }

    #[test]
    fn carries_year_forward_to_continuation_lines() {
        let outcome = RecordAssembler::default()
            .assemble(
                OccurrenceType::Event,
                &day("July_20"),
                &["1969 – Man lands on Moon.", "Armstrong takes first steps."],
            )
            .expect("group should assemble");

        assert_eq!(outcome.records.len(), 2);
        let (first, second) = (&outcome.records[0], &outcome.records[1]);
        assert_eq!(first.date(), second.date());
        assert_eq!(first.date().year, 1969);
        assert_eq!(first.description(), "Man lands on Moon.");
        assert_eq!(second.description(), "Armstrong takes first steps.");
    }

    #[test]
    fn line_without_separator_gets_placeholder_and_sets_year() {
        let outcome = RecordAssembler::default()
            .assemble(
                OccurrenceType::Event,
                &day("January_1"),
                &["Pre-1600", "Something undated happened."],
            )
            .expect("group should assemble");

        assert_eq!(outcome.records[0].description(), PLACEHOLDER_DESCRIPTION);
        assert_eq!(outcome.records[1].date().year, 1600);
    }

    #[test]
    fn ascii_dash_separator_is_accepted() {
        let outcome = RecordAssembler::default()
            .assemble(OccurrenceType::Event, &day("May_4"), &["1970 - Kent State shootings."])
            .expect("group should assemble");
        assert_eq!(outcome.records[0].description(), "Kent State shootings.");
    }

    #[test]
    fn description_keeps_text_after_first_separator() {
        let outcome = RecordAssembler::default()
            .assemble(
                OccurrenceType::Event,
                &day("May_4"),
                &["1970 – Shootings – four students killed."],
            )
            .expect("group should assemble");
        assert_eq!(
            outcome.records[0].description(),
            "Shootings – four students killed."
        );
    }

    #[test]
    fn orphan_line_aborts_group_by_default() {
        let err = RecordAssembler::default()
            .assemble(
                OccurrenceType::Event,
                &day("July_20"),
                &["No year here.", "1969 – Man lands on Moon."],
            )
            .expect_err("orphan line must abort");
        assert_eq!(
            err,
            AssembleError::MalformedGroup {
                line_index: 0,
                line: "No year here.".to_string()
            }
        );
    }

    #[test]
    fn orphan_line_can_be_skipped() {
        let assembler = RecordAssembler::new(AssemblerOptions {
            orphan_lines: OrphanLinePolicy::SkipLine,
            ..AssemblerOptions::default()
        });
        let outcome = assembler
            .assemble(
                OccurrenceType::Event,
                &day("July_20"),
                &["No year here.", "1969 – Man lands on Moon."],
            )
            .expect("group should assemble");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.line_failures.len(), 1);
        assert_eq!(outcome.line_failures[0].error, LineError::MissingYear);
    }

    #[test]
    fn bad_date_is_isolated_to_its_line() {
        let outcome = RecordAssembler::default()
            .assemble(
                OccurrenceType::Event,
                &day("February_29"),
                &["1900 – Not a leap year.", "2000 – A leap year."],
            )
            .expect("group should assemble");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].date().year, 2000);
        assert_eq!(outcome.line_failures.len(), 1);
        assert!(matches!(
            outcome.line_failures[0].error,
            LineError::DateConstruction(_)
        ));
    }

    #[test]
    fn ambiguous_years_are_counted() {
        let outcome = RecordAssembler::default()
            .assemble(
                OccurrenceType::Event,
                &day("February_2"),
                &["1425 (or 1426) – Something happened."],
            )
            .expect("group should assemble");
        assert_eq!(outcome.ambiguous_years, 1);
        assert_eq!(outcome.records[0].date().year, 1425);
    }

    #[test]
    fn person_entries_are_split() {
        let outcome = RecordAssembler::default()
            .assemble(
                OccurrenceType::Death,
                &day("March_15"),
                &["44 BC – Julius Caesar, Roman politician (assassinated)."],
            )
            .expect("group should assemble");

        match &outcome.records[0] {
            NormalizedRecord::Death {
                date,
                name,
                description,
            } => {
                assert_eq!(date.year, -44);
                assert_eq!((date.month, date.day), (3, 15));
                assert_eq!(name, "Julius Caesar");
                assert_eq!(description, "Roman politician");
            }
            other => panic!("unexpected record: {other:?}"),
        }
    }

    #[test]
    fn sequence_markers_are_stripped() {
        let sequence = [
            "Births",
            "1879 – Albert Einstein, physicist (d. 1955)",
            "March_14",
        ];
        let outcome = RecordAssembler::default()
            .assemble_sequence(&sequence)
            .expect("sequence should assemble");
        assert_eq!(outcome.kind, OccurrenceType::Birth);
        assert_eq!(outcome.day, day("March_14"));
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name(), Some("Albert Einstein"));
    }

    #[test]
    fn sequence_without_markers_is_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(
            RecordAssembler::default().assemble_sequence(&empty),
            Err(AssembleError::MissingGroupMarkers)
        );
        assert_eq!(
            RecordAssembler::default().assemble_sequence(&["Events"]),
            Err(AssembleError::MissingGroupMarkers)
        );
        assert!(matches!(
            RecordAssembler::default().assemble_sequence(&["Holidays", "June_1"]),
            Err(AssembleError::UnknownOccurrenceMarker(_))
        ));
    }
}
