//! Catalog adapter - Loads the lookup catalog from YAML.
//!
//! # Components
//!
//! - `YamlCatalogLoader` - Reads a catalog file or the embedded default

mod yaml_loader;

pub use yaml_loader::YamlCatalogLoader;
