use almanac_core::{
    classify_line, gregorian_to_julian_day, parse_year, split_subject, AssemblerOptions,
    BcYearShift, DayLabel, LineClass, NormalizedRecord, OccurrenceType, RecordAssembler,
};

fn day(label: &str) -> DayLabel {
    DayLabel::parse(label).unwrap()
}

#[test]
fn short_years_are_padded_and_keep_their_digits_as_suffix() {
    for raw in ["1", "42", "984", "1999"] {
        let token = parse_year(raw);
        assert_eq!(token.canonical_year.len(), 4);
        assert!(token.canonical_year.ends_with(raw));
        assert!(token.canonical_year.bytes().all(|b| b.is_ascii_digit()));
    }
    assert_eq!(parse_year("98").canonical_year, "0098");
    assert!(!parse_year("98").is_bc);
}

#[test]
fn bc_and_plain_years_parse() {
    let bc = parse_year("45 BC");
    assert_eq!((bc.canonical_year.as_str(), bc.is_bc), ("0045", true));

    let plain = parse_year("1999");
    assert_eq!((plain.canonical_year.as_str(), plain.is_bc), ("1999", false));
}

#[test]
fn julian_day_reference_point() {
    assert_eq!(gregorian_to_julian_day(2000, 1, 1), 2_451_544.5);
}

#[test]
fn splitter_matches_almanac_conventions() {
    assert_eq!(
        split_subject("Albert Einstein, physicist (born 1879)"),
        ("Albert Einstein".to_string(), "physicist".to_string())
    );
    assert_eq!(
        split_subject("John Doe (explorer)"),
        ("John Doe ".to_string(), "not described".to_string())
    );
}

#[test]
fn classifier_discards_footnotes_only() {
    assert_eq!(classify_line("Pre-Julian Roman calendar"), LineClass::Discard);
    assert_eq!(classify_line(""), LineClass::Discard);
    assert_eq!(classify_line("753 BC – Rome founded."), LineClass::Continuation);
}

#[test]
fn carry_forward_shares_year_and_julian_day() {
    let outcome = RecordAssembler::default()
        .assemble(
            OccurrenceType::Event,
            &day("July_20"),
            &["1969 – Man lands on Moon.", "Armstrong takes first steps."],
        )
        .unwrap();

    assert_eq!(outcome.records.len(), 2);
    let first = outcome.records[0].date();
    let second = outcome.records[1].date();
    assert_eq!(first.year, 1969);
    assert_eq!(second.year, 1969);
    assert_eq!(first.julian_day, second.julian_day);
    assert_eq!(outcome.records[1].description(), "Armstrong takes first steps.");
}

#[test]
fn julius_caesar_death_end_to_end() {
    let outcome = RecordAssembler::default()
        .assemble(
            OccurrenceType::Death,
            &day("March_15"),
            &["44 BC – Julius Caesar, Roman politician (assassinated)."],
        )
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    let record = &outcome.records[0];
    let date = record.date();
    assert_eq!(date.display_year(), "-0044");
    assert_eq!(date.storage_key(), -440_315);
    assert_eq!((date.month, date.day), (3, 15));
    assert_eq!(date.julian_day, 1_705_427.5);
    assert_eq!(date.julian_day, gregorian_to_julian_day(-43, 3, 15));
    assert_eq!(
        record,
        &NormalizedRecord::Death {
            date: *date,
            name: "Julius Caesar".to_string(),
            description: "Roman politician".to_string(),
        }
    );
}

#[test]
fn negate_only_policy_converts_bc_years_unshifted() {
    let assembler = RecordAssembler::new(AssemblerOptions {
        bc_shift: BcYearShift::NegateOnly,
        ..AssemblerOptions::default()
    });
    let outcome = assembler
        .assemble(
            OccurrenceType::Event,
            &day("April_21"),
            &["753 BC – Rome founded.", "AD 98 – Trajan becomes emperor."],
        )
        .unwrap();

    assert_eq!(outcome.records[0].date().year, -753);
    assert_eq!(
        outcome.records[0].date().julian_day,
        gregorian_to_julian_day(-753, 4, 21)
    );
    assert_eq!(outcome.records[1].date().year, 98);
    assert_eq!(
        outcome.records[1].date().julian_day,
        gregorian_to_julian_day(98, 4, 21)
    );
}

#[test]
fn julian_days_order_records_across_the_bc_ad_boundary() {
    let outcome = RecordAssembler::default()
        .assemble(
            OccurrenceType::Event,
            &day("January_1"),
            &[
                "1999 – Euro introduced.",
                "45 BC – Julian calendar takes effect.",
                "AD 98 – Something in 98.",
                "984 – Something in 984.",
            ],
        )
        .unwrap();

    let mut years: Vec<(f64, i32)> = outcome
        .records
        .iter()
        .map(|record| (record.date().julian_day, record.date().year))
        .collect();
    years.sort_by(|a, b| a.0.total_cmp(&b.0));
    let ordered: Vec<i32> = years.into_iter().map(|(_, year)| year).collect();
    assert_eq!(ordered, vec![-45, 98, 984, 1999]);
}
