//! Cart store.
//!
//! Owns the shopper's cart, validates every change against the catalog's
//! stock, persists a snapshot after each successful change and publishes the
//! new cart to subscribers.

use std::{
    collections::HashMap,
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, Mutex as StdMutex, PoisonError},
};

use tokio::sync::{Mutex, OwnedMutexGuard, watch};
use tracing::{debug, instrument, warn};

use crate::{
    domain::{
        cart::{
            errors::{CartError, CartOperation},
            models::{Cart, CartItem, UpdateProductAmount},
        },
        catalog::{Catalog, CatalogError, models::ProductId},
    },
    notifications::ErrorSink,
    storage::{KeyValueStore, StorageError},
};

/// Storage key of the cart snapshot.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// The shopper's cart, checked against catalog stock and persisted under
/// [`CART_STORAGE_KEY`].
///
/// Operations on the same product run one at a time. Each successful change
/// is written to storage before subscribers see it.
pub struct CartStore {
    catalog: Arc<dyn Catalog>,
    storage: Arc<dyn KeyValueStore>,
    errors: Arc<dyn ErrorSink>,
    state: watch::Sender<Arc<Cart>>,
    commit_lock: Mutex<()>,
    product_locks: StdMutex<HashMap<ProductId, Arc<Mutex<()>>>>,
}

impl CartStore {
    /// Build a store around the snapshot held in `storage`.
    ///
    /// A missing snapshot starts an empty cart, as does one that cannot be
    /// decoded (logged and discarded).
    ///
    /// # Errors
    ///
    /// Returns an error when the storage backend cannot be read.
    pub async fn load(
        catalog: Arc<dyn Catalog>,
        storage: Arc<dyn KeyValueStore>,
        errors: Arc<dyn ErrorSink>,
    ) -> Result<Self, StorageError> {
        let cart = match storage.get(CART_STORAGE_KEY).await? {
            Some(snapshot) => Cart::from_snapshot(&snapshot).unwrap_or_else(|error| {
                warn!(%error, "discarding unreadable cart snapshot");

                Cart::default()
            }),
            None => Cart::default(),
        };

        debug!(items = cart.len(), "cart loaded");

        Ok(Self {
            catalog,
            storage,
            errors,
            state: watch::Sender::new(Arc::new(cart)),
            commit_lock: Mutex::new(()),
            product_locks: StdMutex::new(HashMap::new()),
        })
    }

    /// Current cart.
    pub fn cart(&self) -> Arc<Cart> {
        Arc::clone(&*self.state.borrow())
    }

    /// Receiver that observes every committed cart.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Cart>> {
        self.state.subscribe()
    }

    /// Add one unit of `product`, appending a new line when it is not yet in
    /// the cart.
    ///
    /// Failures are reported to the error sink and returned; the cart is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`CartError::OutOfStock`] when no further unit is available,
    /// [`CartError::ProductNotFound`] when the catalog does not know the
    /// product, or a catalog/storage error.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product: ProductId) -> Result<Arc<Cart>, CartError> {
        let result = self.try_add_product(product).await;

        self.report(CartOperation::Add, result)
    }

    /// Remove the line for `product`.
    ///
    /// # Errors
    ///
    /// [`CartError::NotInCart`] when there is no such line, or a storage
    /// error.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, product: ProductId) -> Result<Arc<Cart>, CartError> {
        let result = self.try_remove_product(product).await;

        self.report(CartOperation::Remove, result)
    }

    /// Set the amount held for a product already in the cart.
    ///
    /// # Errors
    ///
    /// [`CartError::InvalidAmount`] for amounts below one,
    /// [`CartError::NotInCart`] when there is no such line,
    /// [`CartError::OutOfStock`] when the amount exceeds stock, or a
    /// catalog/storage error.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<Arc<Cart>, CartError> {
        let result = self.try_update_product_amount(update).await;

        self.report(CartOperation::UpdateAmount, result)
    }

    async fn try_add_product(&self, product: ProductId) -> Result<Arc<Cart>, CartError> {
        let _product_guard = self.lock_product(product).await;

        let stock = self
            .catalog
            .get_stock(product)
            .await
            .map_err(|error| missing_product(product, error))?;

        let current = self.cart().get(product).map(|item| item.amount);
        let requested = current.unwrap_or(0).saturating_add(1);

        if !stock.covers(u64::from(requested)) {
            return Err(CartError::OutOfStock {
                product,
                requested: u64::from(requested),
                available: stock.available(),
            });
        }

        if current.is_some() {
            return self
                .commit(|cart| {
                    cart.with_amount(product, requested)
                        .ok_or(CartError::NotInCart(product))
                })
                .await;
        }

        let details = self
            .catalog
            .get_product(product)
            .await
            .map_err(|error| missing_product(product, error))?;

        let item = CartItem {
            id: product,
            ..CartItem::first_unit(details)
        };

        self.commit(move |cart| Ok(cart.with_item(item))).await
    }

    async fn try_remove_product(&self, product: ProductId) -> Result<Arc<Cart>, CartError> {
        let _product_guard = self.lock_product(product).await;

        if !self.cart().contains(product) {
            return Err(CartError::NotInCart(product));
        }

        self.commit(|cart| cart.without(product).ok_or(CartError::NotInCart(product)))
            .await
    }

    async fn try_update_product_amount(
        &self,
        UpdateProductAmount { product, amount }: UpdateProductAmount,
    ) -> Result<Arc<Cart>, CartError> {
        if amount < 1 {
            return Err(CartError::InvalidAmount { product, amount });
        }

        let requested = amount.unsigned_abs();

        let _product_guard = self.lock_product(product).await;

        if !self.cart().contains(product) {
            return Err(CartError::NotInCart(product));
        }

        let stock = self.catalog.get_stock(product).await?;

        let out_of_stock = CartError::OutOfStock {
            product,
            requested,
            available: stock.available(),
        };

        if !stock.covers(requested) {
            return Err(out_of_stock);
        }

        // Covered amounts never exceed the u32 stock level.
        let requested = u32::try_from(requested).map_err(|_err| out_of_stock)?;

        self.commit(|cart| {
            cart.with_amount(product, requested)
                .ok_or(CartError::NotInCart(product))
        })
        .await
    }

    /// Apply `change` to the latest cart, persist the result and publish it.
    ///
    /// The snapshot is written before publishing, so a failed write leaves
    /// both the published and the persisted cart untouched.
    async fn commit<F>(&self, change: F) -> Result<Arc<Cart>, CartError>
    where
        F: FnOnce(&Cart) -> Result<Cart, CartError>,
    {
        let _commit_guard = self.commit_lock.lock().await;

        let current = self.cart();
        let next = change(current.as_ref())?;

        self.storage
            .set(CART_STORAGE_KEY, next.to_snapshot()?)
            .await?;

        let next = Arc::new(next);

        self.state.send_replace(Arc::clone(&next));

        debug!(
            lines = next.len(),
            units = next.items_count(),
            "cart committed"
        );

        Ok(next)
    }

    /// Serialize operations on the same product for their whole duration.
    async fn lock_product(&self, product: ProductId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self
                .product_locks
                .lock()
                .unwrap_or_else(PoisonError::into_inner);

            Arc::clone(locks.entry(product).or_default())
        };

        lock.lock_owned().await
    }

    fn report(
        &self,
        operation: CartOperation,
        result: Result<Arc<Cart>, CartError>,
    ) -> Result<Arc<Cart>, CartError> {
        if let Err(error) = &result {
            warn!(%operation, %error, "cart operation rejected");

            self.errors.error(&error.user_message(operation));
        }

        result
    }
}

impl Debug for CartStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartStore")
            .field("cart", &self.cart())
            .finish_non_exhaustive()
    }
}

/// A 404 while adding means the shopper picked a product the catalog does
/// not carry.
fn missing_product(product: ProductId, error: CatalogError) -> CartError {
    if error.is_not_found() {
        CartError::ProductNotFound {
            product,
            source: error,
        }
    } else {
        CartError::Catalog(error)
    }
}
