//! Normalized almanac domain model.
//!
//! # Responsibility
//! - Define the records produced by the normalization pipeline.
//! - Define the calendar-day label that scopes one almanac page.
//!
//! # Invariants
//! - `YearToken::canonical_year` is always exactly four ASCII digits.
//! - A `NormalizedDate` year is negative iff the entry is BC.
//! - Records are built once by the assembler and never mutated afterwards.

pub mod day;
pub mod record;
