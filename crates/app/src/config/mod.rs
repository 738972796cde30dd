//! Cart application configuration

use clap::Args;

use crate::config::{
    catalog::CatalogConfig, observability::LoggingConfig, storage::StorageConfig,
};

pub mod catalog;
pub mod observability;
pub mod storage;

/// RocketCart configuration, read from CLI arguments and the environment.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Catalog API settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Local snapshot storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
