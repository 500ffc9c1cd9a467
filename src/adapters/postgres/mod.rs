//! PostgreSQL adapters - Database implementations for the answer and report ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresAnswerReader` - Answers joined with their question metadata
//! - `PostgresReportRepository` - Generated reports, one per user and kind

mod answer_reader;
mod report_repository;

pub use answer_reader::PostgresAnswerReader;
pub use report_repository::PostgresReportRepository;
