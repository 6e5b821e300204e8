//! Persistence sink for normalized records.
//!
//! # Responsibility
//! - Define the sink contract the ingest pipeline writes through.
//! - Keep SQL details inside the SQLite implementation.
//!
//! # Invariants
//! - Placeholder rows (`dummy` headers) are removable through the sink.
//! - Read paths reject invalid persisted rows instead of masking them.

pub mod record_repo;
