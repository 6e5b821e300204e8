//! Almanac record normalization core.
//!
//! Converts loosely structured "on this day" entries (events, births and
//! deaths grouped per calendar day) into chronologically sortable records
//! with a signed four digit year, an integer calendar date and a fractional
//! Julian day number.

pub mod calendar;
pub mod db;
pub mod logging;
pub mod model;
pub mod parse;
pub mod repo;
pub mod service;
pub mod source;

pub use calendar::{assemble_date, gregorian_to_julian_day, BcYearShift, DateConstructionError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::day::{DayLabel, DayLabelError};
pub use model::record::{
    NormalizedDate, NormalizedRecord, OccurrenceType, YearAmbiguity, YearToken,
    PLACEHOLDER_DESCRIPTION,
};
pub use parse::{classify_line, opens_entry, parse_year, split_subject, LineClass};
pub use repo::record_repo::{RecordSink, RepoError, RepoResult, SqliteRecordRepository};
pub use service::assembler::{
    AssembleError, AssemblerOptions, GroupOutcome, LineError, LineFailure, OrphanLinePolicy,
    RecordAssembler,
};
pub use service::ingest_service::{IngestError, IngestReport, IngestService};
pub use source::{all_day_labels, DayPage, DirectorySource, SourceError, SourceProvider};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
