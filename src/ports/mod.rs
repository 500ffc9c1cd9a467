//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnswerReader` - Submitted answers joined with question metadata
//! - `ReportRepository` - Generated framework and composite reports

mod answer_reader;
mod report_repository;

pub use answer_reader::AnswerReader;
pub use report_repository::{ReportKind, ReportRepository, StoredReport};
