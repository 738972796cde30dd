//! Catalog errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::catalog::models::ProductId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request for {resource}/{id} failed with status code 404")]
    NotFound { resource: &'static str, id: ProductId },

    #[error("request for {resource}/{id} failed with status code {status}")]
    UnexpectedStatus {
        resource: &'static str,
        id: ProductId,
        status: StatusCode,
    },

    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl CatalogError {
    /// Whether the catalog reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Http(error) => error.status() == Some(StatusCode::NOT_FOUND),
            Self::UnexpectedStatus { .. } => false,
        }
    }
}
