use almanac_core::db::open_db;
use almanac_core::{
    all_day_labels, DayLabel, DirectorySource, IngestReport, IngestService, RecordAssembler,
    SqliteRecordRepository,
};
use anyhow::{Context, Result};
use log::info;

use crate::cli::IngestArgs;
use crate::config::AlmanacConfig;

/// Execute the `ingest` subcommand.
pub fn run(args: IngestArgs, log_level: Option<&str>) -> Result<()> {
    let mut config = AlmanacConfig::load(args.config.as_deref())?;
    if let Some(pages_dir) = args.pages_dir {
        config.pages_dir = pages_dir;
    }
    if let Some(db) = args.db {
        config.database = db;
    }
    crate::start_logging(&config, log_level)?;

    let days = resolve_days(&args.days)?;
    let conn = open_db(&config.database)
        .with_context(|| format!("failed to open database: {}", config.database.display()))?;
    let mut repo = SqliteRecordRepository::new(&conn);

    info!(
        "event=ingest_cli_start module=cli status=ok days={} pages_dir={}",
        days.len(),
        config.pages_dir.display()
    );
    let service = IngestService::new(
        DirectorySource::new(&config.pages_dir),
        RecordAssembler::new(config.assembler),
    );
    let report = service.run(&days, &mut repo).context("ingest failed")?;

    print_report(&report);
    Ok(())
}

fn resolve_days(raw: &[String]) -> Result<Vec<DayLabel>> {
    if raw.is_empty() {
        return Ok(all_day_labels());
    }
    raw.iter()
        .map(|label| DayLabel::parse(label).with_context(|| format!("bad --day `{label}`")))
        .collect()
}

fn print_report(report: &IngestReport) {
    println!(
        "days: {} processed, {} missed",
        report.days_processed,
        report.missed_days.len()
    );
    println!(
        "records: {} written, {} placeholders purged",
        report.records_written, report.placeholders_purged
    );
    println!(
        "issues: {} failed groups, {} failed lines, {} ambiguous years",
        report.failed_groups.len(),
        report.line_failures.len(),
        report.ambiguous_years
    );
    for day in &report.missed_days {
        println!("missed {day}");
    }
    for group in &report.failed_groups {
        println!("failed {} {}: {}", group.day, group.kind.marker(), group.error);
    }
    for entry in &report.line_failures {
        println!(
            "skipped {} {} line {}: {}",
            entry.day,
            entry.kind.marker(),
            entry.failure.line_index,
            entry.failure.error
        );
    }
}
