//! Report handlers.
//!
//! ## Commands
//! - Generating a single framework report
//! - Generating the composite report across completed frameworks
//!
//! ## Queries
//! - Listing a user's stored reports

mod generate_composite_report;
mod generate_framework_report;
mod list_user_reports;

// Commands
pub use generate_composite_report::{
    GenerateCompositeReportCommand, GenerateCompositeReportHandler, GenerateCompositeReportResult,
};
pub use generate_framework_report::{
    GenerateFrameworkReportCommand, GenerateFrameworkReportHandler, GenerateFrameworkReportResult,
};

// Queries
pub use list_user_reports::{ListUserReportsHandler, ListUserReportsQuery};
