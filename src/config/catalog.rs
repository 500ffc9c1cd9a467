//! Catalog configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Where the lookup catalog comes from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file. The embedded catalog is used when unset.
    pub path: Option<String>,
}

impl CatalogConfig {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref().map(Path::new)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(p) if p.trim().is_empty() => Err(ValidationError::EmptyCatalogPath),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_embedded_catalog() {
        let config = CatalogConfig::default();
        assert!(config.path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_path_is_rejected() {
        let config = CatalogConfig {
            path: Some("  ".to_string()),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyCatalogPath));
    }
}
