//! Cart errors and their user-facing messages.

use std::{
    borrow::Cow,
    fmt::{Display, Formatter, Result as FmtResult},
};

use thiserror::Error;

use crate::{
    domain::catalog::{CatalogError, models::ProductId},
    storage::StorageError,
};

/// Shown when an add or update asks for more units than are in stock.
pub const OUT_OF_STOCK_MESSAGE: &str = "Quantidade solicitada fora de estoque";
/// Shown when a product cannot be added to the cart.
pub const ADD_FAILED_MESSAGE: &str = "Erro na adição do produto";
/// Shown when a product cannot be removed from the cart.
pub const REMOVE_FAILED_MESSAGE: &str = "Erro na remoção do produto";
/// Shown when a cart line's amount cannot be changed.
pub const UPDATE_FAILED_MESSAGE: &str = "Erro na alteração de quantidade do produto";

/// The cart operation an error was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl CartOperation {
    fn failure_message(self) -> &'static str {
        match self {
            Self::Add => ADD_FAILED_MESSAGE,
            Self::Remove => REMOVE_FAILED_MESSAGE,
            Self::UpdateAmount => UPDATE_FAILED_MESSAGE,
        }
    }
}

impl Display for CartOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Add => "add_product",
            Self::Remove => "remove_product",
            Self::UpdateAmount => "update_product_amount",
        })
    }
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("{requested} unit(s) of product {product} requested but only {available} in stock")]
    OutOfStock {
        product: ProductId,
        requested: u64,
        available: u32,
    },

    #[error("product {product} does not exist in the catalog")]
    ProductNotFound {
        product: ProductId,
        #[source]
        source: CatalogError,
    },

    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("invalid amount {amount} for product {product}")]
    InvalidAmount { product: ProductId, amount: i64 },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to encode cart snapshot")]
    Snapshot(#[from] serde_json::Error),

    #[error("failed to persist cart snapshot")]
    Storage(#[from] StorageError),
}

impl CartError {
    /// Single-line message shown to the shopper when `operation` fails.
    #[must_use]
    pub fn user_message(&self, operation: CartOperation) -> Cow<'static, str> {
        match self {
            Self::OutOfStock { .. } => Cow::Borrowed(OUT_OF_STOCK_MESSAGE),
            Self::ProductNotFound { .. } => Cow::Borrowed(ADD_FAILED_MESSAGE),
            Self::InvalidAmount { .. } => Cow::Borrowed(UPDATE_FAILED_MESSAGE),
            Self::Catalog(error) => Cow::Owned(error.to_string()),
            Self::NotInCart(_) | Self::Snapshot(_) | Self::Storage(_) => {
                Cow::Borrowed(operation.failure_message())
            }
        }
    }
}

/// A persisted snapshot that cannot be turned back into a cart.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not a valid cart document")]
    Json(#[from] serde_json::Error),

    #[error("snapshot lists product {0} more than once")]
    DuplicateProduct(ProductId),

    #[error("snapshot holds product {0} with an amount of zero")]
    ZeroAmount(ProductId),
}
