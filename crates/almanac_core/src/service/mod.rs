//! Normalization use-cases.
//!
//! # Responsibility
//! - Assemble raw line groups into normalized records.
//! - Orchestrate provider, assembler and sink across many days.

pub mod assembler;
pub mod ingest_service;
