//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Catalog path must not be empty")]
    EmptyCatalogPath,

    #[error("Trait low threshold must be below the high threshold")]
    InvalidTraitThresholds,

    #[error("Likert minimum must be below the maximum")]
    InvalidLikertScale,

    #[error("Health thresholds must satisfy average <= integrated")]
    InvalidHealthThresholds,

    #[error("Wing share must be within 0..100 percent")]
    InvalidWingShare,

    #[error("Synthesis limits must be greater than zero")]
    InvalidSynthesisLimits,
}
