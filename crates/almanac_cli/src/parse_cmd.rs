use almanac_core::{DayLabel, GroupOutcome, OccurrenceType, RecordAssembler};
use anyhow::{Context, Result};

use crate::cli::ParseArgs;
use crate::config::AlmanacConfig;

/// Execute the `parse` subcommand.
pub fn run(args: ParseArgs, log_level: Option<&str>) -> Result<()> {
    let config = AlmanacConfig::load(args.config.as_deref())?;
    crate::start_logging(&config, log_level)?;

    let day = DayLabel::parse(&args.day).with_context(|| format!("bad --day `{}`", args.day))?;
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input: {}", args.input.display()))?;

    let outcome = assemble_text(
        RecordAssembler::new(config.assembler),
        args.kind.into(),
        &day,
        &text,
    )?;
    for record in &outcome.records {
        println!("{}", serde_json::to_string(record)?);
    }
    for failure in &outcome.line_failures {
        eprintln!("line {}: {}", failure.line_index, failure.error);
    }
    Ok(())
}

fn assemble_text(
    assembler: RecordAssembler,
    kind: OccurrenceType,
    day: &DayLabel,
    text: &str,
) -> Result<GroupOutcome> {
    let lines: Vec<&str> = text.lines().collect();
    assembler
        .assemble(kind, day, &lines)
        .with_context(|| format!("failed to assemble {} for {day}", kind.marker()))
}
