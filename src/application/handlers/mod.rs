//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod report;

pub use report::{
    GenerateCompositeReportCommand, GenerateCompositeReportHandler, GenerateCompositeReportResult,
    GenerateFrameworkReportCommand, GenerateFrameworkReportHandler, GenerateFrameworkReportResult,
    ListUserReportsHandler, ListUserReportsQuery,
};
