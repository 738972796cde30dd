//! Key-value persistence for cart snapshots.

use async_trait::async_trait;
use mockall::automock;

pub mod errors;
pub mod file;
pub mod memory;

pub use errors::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Opaque string key-value store, the local persistence behind the cart.
#[automock]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}
