//! Line-level text parsers used by the record assembler.
//!
//! # Responsibility
//! - Classify raw almanac lines (discard vs. participate, opens-entry check).
//! - Normalize heterogeneous year notations into a `YearToken`.
//! - Split a person entry into name and short description.
//!
//! # Invariants
//! - Every function here is total: no input string produces an error.
//! - The line heuristics are kept exactly as stated; downstream record counts
//!   depend on their boundary behavior.

pub mod classify;
pub mod subject;
pub mod year;

pub use classify::{classify_line, normalize_separator, opens_entry, LineClass, ENTRY_SEPARATOR};
pub use subject::{split_subject, UNDESCRIBED};
pub use year::parse_year;
