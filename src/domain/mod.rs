//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - Answer aggregation, scoring and classification per framework
//! - `catalog` - Keyed descriptive tables used for presentation
//! - `synthesis` - Cross-framework composite reports

pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod synthesis;
