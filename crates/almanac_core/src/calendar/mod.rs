//! Proleptic Gregorian date assembly and Julian day conversion.
//!
//! # Responsibility
//! - Combine a parsed year with a page's month/day into a validated date.
//! - Convert dates to fractional Julian day numbers for chronological sorting.
//!
//! # Invariants
//! - Julian day numbers are half-integers (midnight based).
//! - For a fixed month/day, a larger year always yields a larger Julian day.

mod civil;
mod julian;

pub use civil::{assemble_date, BcYearShift, DateConstructionError};
pub use julian::gregorian_to_julian_day;
