//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Local snapshot storage settings.
#[derive(Debug, Clone, Args)]
pub struct StorageConfig {
    /// Path of the JSON document holding the cart snapshot
    #[arg(long, env = "CART_STORAGE_PATH", default_value = "rocketcart.json")]
    pub storage_path: PathBuf,
}
