//! Cart Models

use std::slice::Iter;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    cart::errors::SnapshotError,
    catalog::models::{CatalogProduct, ProductId},
};

/// CartItem Model
///
/// A catalog product together with the quantity held in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub amount: u32,
}

impl CartItem {
    /// A fresh line for `product` holding a single unit.
    #[must_use]
    pub fn first_unit(product: CatalogProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }

    /// Line subtotal (`price * amount`), or `None` if it does not fit in a
    /// [`Decimal`].
    #[must_use]
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.amount))
    }
}

/// Amount update request for a single cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product: ProductId,
    pub amount: i64,
}

/// Cart Model
///
/// Ordered, unique-by-id sequence of lines. Insertion order is display order.
/// Values are never changed in place: every mutation builds a new `Cart`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Parse a persisted snapshot (a JSON array of lines).
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot is not valid JSON or breaks the
    /// cart invariants (duplicate ids, zero amounts).
    pub fn from_snapshot(snapshot: &str) -> Result<Self, SnapshotError> {
        let items: Vec<CartItem> = serde_json::from_str(snapshot)?;

        Self::try_from(items)
    }

    /// Serialize the cart as a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn iter(&self) -> Iter<'_, CartItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, product: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == product)
    }

    #[must_use]
    pub fn contains(&self, product: ProductId) -> bool {
        self.get(product).is_some()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn items_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    /// Sum of all line subtotals, or `None` on overflow.
    #[must_use]
    pub fn total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.subtotal()?))
    }

    /// A copy with `item` appended, or replacing the line with the same id
    /// in its current position.
    #[must_use]
    pub fn with_item(&self, item: CartItem) -> Self {
        let mut items = self.items.clone();

        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }

        Self { items }
    }

    /// A copy with the line for `product` set to `amount`, or `None` when the
    /// product is not in the cart.
    #[must_use]
    pub fn with_amount(&self, product: ProductId, amount: u32) -> Option<Self> {
        let mut items = self.items.clone();

        items.iter_mut().find(|item| item.id == product)?.amount = amount;

        Some(Self { items })
    }

    /// A copy without the line for `product`, or `None` when the product is
    /// not in the cart.
    #[must_use]
    pub fn without(&self, product: ProductId) -> Option<Self> {
        let position = self.items.iter().position(|item| item.id == product)?;

        let mut items = self.items.clone();
        items.remove(position);

        Some(Self { items })
    }
}

impl TryFrom<Vec<CartItem>> for Cart {
    type Error = SnapshotError;

    fn try_from(items: Vec<CartItem>) -> Result<Self, Self::Error> {
        for (index, item) in items.iter().enumerate() {
            if item.amount == 0 {
                return Err(SnapshotError::ZeroAmount(item.id));
            }

            if items.iter().take(index).any(|seen| seen.id == item.id) {
                return Err(SnapshotError::DuplicateProduct(item.id));
            }
        }

        Ok(Self { items })
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
