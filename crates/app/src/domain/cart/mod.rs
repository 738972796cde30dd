//! Cart

pub mod errors;
pub mod models;
pub mod store;
pub mod table;

pub use errors::{CartError, CartOperation, SnapshotError};
pub use store::{CART_STORAGE_KEY, CartStore};
