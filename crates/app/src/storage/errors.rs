//! Storage errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o error")]
    Io(#[from] io::Error),

    #[error("storage file is not a valid key-value document")]
    Corrupt(#[from] serde_json::Error),
}
