//! Day-by-day ingest orchestration.
//!
//! # Responsibility
//! - Fetch each day from a `SourceProvider`, assemble its three groups and
//!   hand the records to a `RecordSink`.
//! - Run the sink's placeholder cleanup once all days are stored.
//!
//! # Invariants
//! - Retrieval failures never reach the assembler; they are recorded as
//!   missed days.
//! - Group-fatal assembly errors drop that group only.
//! - Sink failures abort the run.

use crate::model::day::DayLabel;
use crate::model::record::OccurrenceType;
use crate::repo::record_repo::{RecordSink, RepoError};
use crate::service::assembler::{AssembleError, LineFailure, RecordAssembler};
use crate::source::SourceProvider;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

#[derive(Debug)]
pub enum IngestError {
    Sink(RepoError),
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sink(err) => write!(f, "record sink failed: {err}"),
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sink(err) => Some(err),
        }
    }
}

impl From<RepoError> for IngestError {
    fn from(value: RepoError) -> Self {
        Self::Sink(value)
    }
}

/// A group dropped because of a group-fatal assembly error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedGroup {
    pub day: DayLabel,
    pub kind: OccurrenceType,
    pub error: AssembleError,
}

/// Line failure tagged with the group it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLineFailure {
    pub day: DayLabel,
    pub kind: OccurrenceType,
    pub failure: LineFailure,
}

/// Summary of one ingest run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub days_processed: usize,
    pub records_written: usize,
    /// Days the provider could not supply, in request order.
    pub missed_days: Vec<DayLabel>,
    pub failed_groups: Vec<FailedGroup>,
    pub line_failures: Vec<GroupLineFailure>,
    pub ambiguous_years: usize,
    pub placeholders_purged: usize,
}

/// Drives provider, assembler and sink over a list of days.
pub struct IngestService<P: SourceProvider> {
    provider: P,
    assembler: RecordAssembler,
}

impl<P: SourceProvider> IngestService<P> {
    pub fn new(provider: P, assembler: RecordAssembler) -> Self {
        Self {
            provider,
            assembler,
        }
    }

    /// Ingests `days` in order and purges placeholders at the end.
    ///
    /// # Errors
    /// - `IngestError::Sink` when the sink rejects a write or the cleanup.
    pub fn run<S: RecordSink>(
        &self,
        days: &[DayLabel],
        sink: &mut S,
    ) -> Result<IngestReport, IngestError> {
        let started_at = Instant::now();
        let mut report = IngestReport::default();

        for day in days {
            self.ingest_day(day, sink, &mut report)?;
        }

        report.placeholders_purged = sink.purge_placeholders()?;
        info!(
            "event=placeholders_purged module=ingest status=ok removed={}",
            report.placeholders_purged
        );
        info!(
            "event=ingest_finished module=ingest status=ok days={} records={} missed_days={} failed_groups={} line_failures={} duration_ms={}",
            report.days_processed,
            report.records_written,
            report.missed_days.len(),
            report.failed_groups.len(),
            report.line_failures.len(),
            started_at.elapsed().as_millis()
        );
        Ok(report)
    }

    fn ingest_day<S: RecordSink>(
        &self,
        day: &DayLabel,
        sink: &mut S,
        report: &mut IngestReport,
    ) -> Result<(), IngestError> {
        let page = match self.provider.fetch_day(day) {
            Ok(page) => page,
            Err(err) => {
                warn!(
                    "event=day_fetch_failed module=ingest status=error day={} error={}",
                    day, err
                );
                report.missed_days.push(*day);
                return Ok(());
            }
        };

        for (kind, sequence) in page.groups() {
            let outcome = match self.assembler.assemble_sequence(sequence) {
                Ok(outcome) => outcome,
                Err(error) => {
                    warn!(
                        "event=group_failed module=ingest status=error day={} kind={} error={}",
                        day,
                        kind.marker(),
                        error
                    );
                    report.failed_groups.push(FailedGroup {
                        day: *day,
                        kind,
                        error,
                    });
                    continue;
                }
            };

            report.records_written += sink.accept_group(&outcome.records)?;
            report.ambiguous_years += outcome.ambiguous_years;
            report
                .line_failures
                .extend(outcome.line_failures.into_iter().map(|failure| GroupLineFailure {
                    day: *day,
                    kind,
                    failure,
                }));
        }

        report.days_processed += 1;
        Ok(())
    }
}
