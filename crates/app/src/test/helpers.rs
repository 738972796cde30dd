//! Test Helpers

use std::{sync::Mutex, time::Duration};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::{
    domain::{
        cart::models::{Cart, CartItem},
        catalog::{
            Catalog, CatalogError,
            models::{CatalogProduct, ProductId, Stock},
        },
    },
    notifications::ErrorSink,
};

/// Catalog record whose price is `id * 10.50`.
pub(crate) fn catalog_product(id: ProductId) -> CatalogProduct {
    CatalogProduct {
        id,
        title: format!("Product {id}"),
        price: Decimal::new(1_050, 2) * Decimal::from(id.get()),
        image: format!("https://cdn.example.com/{id}.jpg"),
    }
}

pub(crate) fn cart_item(id: u64, amount: u32) -> CartItem {
    CartItem {
        amount,
        ..CartItem::first_unit(catalog_product(ProductId::new(id)))
    }
}

pub(crate) fn cart_of(items: impl IntoIterator<Item = CartItem>) -> Cart {
    items
        .into_iter()
        .fold(Cart::default(), |cart, item| cart.with_item(item))
}

pub(crate) fn stock(id: ProductId, amount: u32) -> Stock {
    Stock {
        id,
        amount: Some(amount),
    }
}

/// Error sink that keeps every message it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl ErrorSink for RecordingSink {
    fn error(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// Catalog that suspends on every request so concurrent operations
/// interleave.
#[derive(Debug)]
pub(crate) struct SlowCatalog {
    stock: u32,
}

impl SlowCatalog {
    pub(crate) fn new(stock: u32) -> Self {
        Self { stock }
    }
}

#[async_trait]
impl Catalog for SlowCatalog {
    async fn get_stock(&self, product: ProductId) -> Result<Stock, CatalogError> {
        tokio::time::sleep(Duration::from_millis(10)).await;

        Ok(stock(product, self.stock))
    }

    async fn get_product(&self, product: ProductId) -> Result<CatalogProduct, CatalogError> {
        tokio::time::sleep(Duration::from_millis(10)).await;

        Ok(catalog_product(product))
    }
}
