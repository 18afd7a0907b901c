//! Catalog providers.
//!
//! The catalog must be fully materialized before the first resolve;
//! these sources are the only place that loading happens.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::CatalogSource;
use crate::domain::Catalog;

/// Catalog shipped inside the binary, used when nothing is configured.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Loads the catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn load(&self) -> Result<Catalog> {
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog: {}", self.path.display()))?;

        let catalog: Catalog =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        debug!(
            path = %self.path.display(),
            items = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}

/// Serves the compiled-in default catalog.
#[derive(Debug, Clone, Default)]
pub struct BundledSource;

#[async_trait]
impl CatalogSource for BundledSource {
    fn name(&self) -> &str {
        "bundled"
    }

    async fn load(&self) -> Result<Catalog> {
        serde_json::from_str(BUNDLED_CATALOG).context("Bundled catalog is malformed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, MediaType};

    #[tokio::test]
    async fn test_bundled_catalog_loads() {
        let catalog = BundledSource.load().await.unwrap();

        assert!(!catalog.is_empty());
        // Every category is populated for video; audio is reserved
        for category in Category::all() {
            let items = catalog.items(MediaType::Video, category).unwrap();
            assert!(!items.is_empty());
        }
        assert!(catalog.has_media_type(MediaType::Audio));
        assert!(catalog.items(MediaType::Audio, Category::Energy).is_none());
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"video":{"energy":[{"title":"T1","url":"u1","thumbnail":"t1"}]},"audio":{}}"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&path);
        assert_eq!(source.name(), "json-file");

        let catalog = source.load().await.unwrap();
        assert_eq!(
            catalog.get(MediaType::Video, Category::Energy, 0).unwrap().title,
            "T1"
        );
    }

    #[tokio::test]
    async fn test_json_file_source_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = JsonFileSource::new(dir.path().join("nope.json"));
        assert!(missing.load().await.is_err());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "not json").unwrap();
        assert!(JsonFileSource::new(&bad).load().await.is_err());
    }
}
