//! Source provider boundary.
//!
//! # Responsibility
//! - Supply, per day label, the three provider sequences (events, births,
//!   deaths) the assembler consumes.
//! - Report retrieval failures as typed `SourceError`s so they are filtered
//!   before assembly.
//!
//! # Invariants
//! - Every sequence starts with its section marker and ends with the day
//!   label.

mod days;
mod directory;
mod page;

pub use days::all_day_labels;
pub use directory::DirectorySource;
pub use page::{split_page, DayPage, HOLIDAYS_HEADER};

use crate::model::day::DayLabel;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type SourceResult<T> = Result<T, SourceError>;

#[derive(Debug)]
pub enum SourceError {
    /// No page is available for the requested day.
    NotFound(DayLabel),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A required section header is absent from the page text.
    MissingSection {
        day: DayLabel,
        section: &'static str,
    },
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(day) => write!(f, "no page for day {day}"),
            Self::Io { path, source } => write!(f, "failed to read `{}`: {source}", path.display()),
            Self::MissingSection { day, section } => {
                write!(f, "page {day} has no `{section}` section")
            }
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Supplies raw almanac lines for one calendar day.
pub trait SourceProvider {
    fn fetch_day(&self, day: &DayLabel) -> SourceResult<DayPage>;
}
