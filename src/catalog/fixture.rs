use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{builtin, CatalogProvider};
use crate::errors::BrowseEaseError;
use crate::models::{ProductResult, SummaryReport};

const MAX_FIXTURE_BYTES: u64 = 1_048_576;

/// Fixed payloads, either built in or loaded from a JSON/YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCatalog {
    pub results: Vec<ProductResult>,
    pub summary: SummaryReport,
}

impl FixtureCatalog {
    pub fn builtin() -> Self {
        Self {
            results: builtin::products(),
            summary: builtin::summary(),
        }
    }

    /// Load a fixture file. `.json` files are parsed as JSON, anything else as YAML.
    ///
    /// A fixture named by a config file is checked for existence by
    /// `parse_config` first and reported as a config error; the not-found
    /// check here covers direct callers.
    pub async fn load(path: &Path) -> Result<Self, BrowseEaseError> {
        if !path.exists() {
            return Err(BrowseEaseError::InvalidFixture(format!(
                "Fixture file not found: {}",
                path.display()
            )));
        }

        let metadata = tokio::fs::metadata(path).await?;
        if metadata.len() > MAX_FIXTURE_BYTES {
            return Err(BrowseEaseError::InvalidFixture("Fixture file exceeds 1MB limit".into()));
        }

        let content = tokio::fs::read_to_string(path).await?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let catalog: FixtureCatalog = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| BrowseEaseError::InvalidFixture(format!("{}: {}", path.display(), e)))?
        };

        catalog.validate()?;
        info!(path = %path.display(), products = catalog.results.len(), "Loaded fixture catalog");
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), BrowseEaseError> {
        if self.results.is_empty() {
            return Err(BrowseEaseError::InvalidFixture("Fixture has no results".into()));
        }
        if self.summary.recommendation.trim().is_empty() {
            return Err(BrowseEaseError::InvalidFixture(
                "Fixture summary has an empty recommendation".into(),
            ));
        }
        Ok(())
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogProvider for FixtureCatalog {
    fn results(&self, _query: &str) -> Vec<ProductResult> {
        self.results.clone()
    }

    fn summary(&self, _query: &str) -> SummaryReport {
        self.summary.clone()
    }

    fn result_count(&self, _query: &str) -> usize {
        self.results.len()
    }
}
