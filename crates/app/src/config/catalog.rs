//! Catalog Config

use std::time::Duration;

use clap::Args;

use crate::domain::catalog::HttpCatalogConfig;

/// Catalog API connection settings.
#[derive(Debug, Clone, Args)]
pub struct CatalogConfig {
    /// Catalog API base URL
    #[arg(long, env = "CATALOG_URL", default_value = "http://localhost:3333")]
    pub catalog_url: String,

    /// Catalog request timeout in seconds (no timeout when unset)
    #[arg(long, env = "CATALOG_TIMEOUT_SECONDS")]
    pub catalog_timeout_seconds: Option<u64>,
}

impl From<&CatalogConfig> for HttpCatalogConfig {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            base_url: config.catalog_url.clone(),
            timeout: config.catalog_timeout_seconds.map(Duration::from_secs),
        }
    }
}
