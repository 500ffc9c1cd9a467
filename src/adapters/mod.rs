//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory answer and report stores
//! - `postgres` - PostgreSQL answer reader and report repository
//! - `catalog` - YAML lookup catalog loader
//! - `http` - Axum REST endpoints

pub mod catalog;
pub mod http;
pub mod memory;
pub mod postgres;
