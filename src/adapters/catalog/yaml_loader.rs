//! YAML catalog loading.

use std::path::Path;

use tracing::info;

use crate::domain::catalog::{CatalogError, LookupCatalog};

const EMBEDDED_CATALOG: &str = include_str!("../../../data/catalog.yaml");

/// Loads and validates [`LookupCatalog`]s.
///
/// Every constructor validates completeness, so a catalog returned from
/// here has an entry for each classification code.
pub struct YamlCatalogLoader;

impl YamlCatalogLoader {
    /// Parses a catalog from YAML text.
    pub fn parse(yaml: &str) -> Result<LookupCatalog, CatalogError> {
        let catalog: LookupCatalog =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<LookupCatalog, CatalogError> {
        Self::parse(EMBEDDED_CATALOG)
    }

    /// Reads a catalog file.
    pub async fn load(path: impl AsRef<Path>) -> Result<LookupCatalog, CatalogError> {
        let path = path.as_ref();
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let catalog = Self::parse(&yaml)?;
        info!(path = %path.display(), version = %catalog.version, "Loaded catalog");
        Ok(catalog)
    }

    /// Reads `path` when given, otherwise falls back to the embedded catalog.
    pub async fn load_or_embedded(path: Option<&Path>) -> Result<LookupCatalog, CatalogError> {
        match path {
            Some(p) => Self::load(p).await,
            None => {
                let catalog = Self::embedded()?;
                info!(version = %catalog.version, "Using embedded catalog");
                Ok(catalog)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = YamlCatalogLoader::embedded().unwrap();
        assert!(catalog.mbti_type("INTJ").is_some());
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let err = YamlCatalogLoader::parse("version: [unclosed").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[tokio::test]
    async fn loads_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(EMBEDDED_CATALOG.as_bytes()).unwrap();

        let catalog = YamlCatalogLoader::load(file.path()).await.unwrap();
        assert_eq!(catalog, YamlCatalogLoader::embedded().unwrap());
    }

    #[tokio::test]
    async fn incomplete_file_is_rejected() {
        let mut catalog = YamlCatalogLoader::embedded().unwrap();
        catalog.mbti.types.remove("ESFP");
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_yaml::to_string(&catalog).unwrap().as_bytes())
            .unwrap();

        match YamlCatalogLoader::load(file.path()).await {
            Err(CatalogError::Incomplete { missing }) => {
                assert_eq!(missing, vec!["mbti.types.ESFP".to_string()]);
            }
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = YamlCatalogLoader::load(dir.path().join("absent.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn no_path_uses_embedded() {
        let catalog = YamlCatalogLoader::load_or_embedded(None).await.unwrap();
        assert_eq!(catalog.version, YamlCatalogLoader::embedded().unwrap().version);
    }
}
