//! Catalog
//!
//! Read-only access to the remote product catalog and its stock levels.

pub mod errors;
pub mod http;
pub mod models;
pub mod service;

pub use errors::CatalogError;
pub use http::{HttpCatalog, HttpCatalogConfig};
pub use service::*;
