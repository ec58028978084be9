use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::{CatalogProvider, FixtureCatalog};
use crate::config::{self, BrowseEaseConfig};
use crate::errors::BrowseEaseError;

/// Everything a subcommand needs from the config file.
pub struct Runtime {
    pub config: BrowseEaseConfig,
    pub catalog: Arc<dyn CatalogProvider>,
}

/// Load the optional config file and the catalog it points at.
pub async fn load(config_path: Option<&str>) -> Result<Runtime, BrowseEaseError> {
    let (config, base_dir) = match config_path {
        Some(path) => {
            let path = PathBuf::from(path);
            let config = config::parse_config(&path).await?;
            debug!(path = %path.display(), "Loaded config");
            (config, path.parent().map(Path::to_path_buf))
        }
        None => (BrowseEaseConfig::default(), None),
    };

    let catalog = match &config.fixtures {
        Some(fixtures) => {
            let path = config::resolve_fixture_path(fixtures, base_dir.as_deref());
            FixtureCatalog::load(&path).await?
        }
        None => {
            info!("Using built-in catalog");
            FixtureCatalog::builtin()
        }
    };

    Ok(Runtime {
        config,
        catalog: Arc::new(catalog),
    })
}
