//! In-memory adapters for development and tests.

mod answer_store;
mod report_repository;

pub use answer_store::InMemoryAnswerStore;
pub use report_repository::InMemoryReportRepository;
