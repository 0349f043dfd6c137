//! The cart store.

use std::sync::{Arc, Mutex, PoisonError};

use rocket_commerce::catalog::InventoryService;
use rocket_commerce::{Cart, CartError, ProductId};
use tokio::sync::watch;

use crate::notify::Operation;
use crate::repository::CartRepository;

/// Request to change a product's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

/// Owns the cart snapshot for one session.
///
/// Every successful operation builds a new `Cart`, writes it through the
/// repository, then publishes it to subscribers. A failed operation does
/// neither. Inventory lookups run without any lock held, so two overlapping
/// calls for the same product may both pass the stock check against the
/// same starting quantity.
pub struct CartStore {
    inventory: Arc<dyn InventoryService>,
    repository: CartRepository,
    state: watch::Sender<Cart>,
    write_lock: Mutex<()>,
}

impl CartStore {
    /// Create a store, seeding the cart from the persisted snapshot.
    pub fn open(
        inventory: Arc<dyn InventoryService>,
        repository: CartRepository,
    ) -> Result<Self, CartError> {
        let cart = repository.load()?;
        tracing::info!(
            key = repository.key(),
            items = cart.unique_item_count(),
            "cart store opened"
        );
        Ok(Self {
            inventory,
            repository,
            state: watch::Sender::new(cart),
            write_lock: Mutex::new(()),
        })
    }

    /// Current snapshot.
    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Receive every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// Add one unit of a product.
    ///
    /// Fails with `StockExceeded` when the inventory has no unit beyond what
    /// the cart already holds. A product not yet in the cart is fetched from
    /// the catalog and appended with amount 1.
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let op = Operation::Add;
        let current = self.cart().amount_of(product_id);

        let stock = self
            .inventory
            .stock(product_id)
            .await
            .map_err(|e| CartError::lookup(op.as_str(), e))?;

        if !stock.allows_increment(current) {
            tracing::debug!(%product_id, current, available = stock.amount, "add rejected by stock");
            return Err(CartError::StockExceeded {
                product_id,
                requested: i64::from(current) + 1,
                available: stock.amount,
            });
        }

        if current > 0 {
            return self.commit(op, |cart| cart.with_incremented(product_id));
        }

        let product = self
            .inventory
            .product(product_id)
            .await
            .map_err(|e| CartError::lookup(op.as_str(), e))?;
        self.commit(op, |cart| cart.with_new_item(product))
    }

    /// Remove a product's line item entirely.
    pub fn remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        self.commit(Operation::Remove, |cart| cart.without(product_id))
    }

    /// Change a product's quantity.
    ///
    /// Amounts of zero or less are ignored and return the current cart. A
    /// positive amount is checked against stock, and on success the line
    /// item grows by exactly one unit whatever amount was requested.
    pub async fn update_product_amount(
        &self,
        request: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        let UpdateProductAmount { product_id, amount } = request;
        let op = Operation::Update;

        if amount <= 0 {
            tracing::debug!(%product_id, amount, "ignoring non-positive amount");
            return Ok(self.cart());
        }

        let stock = self
            .inventory
            .stock(product_id)
            .await
            .map_err(|e| CartError::lookup(op.as_str(), e))?;

        if !stock.can_fulfill(amount) {
            tracing::debug!(%product_id, amount, available = stock.amount, "update rejected by stock");
            return Err(CartError::StockExceeded {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        self.commit(op, |cart| cart.with_incremented(product_id))
    }

    /// Apply `f` to the latest snapshot, persist the result, then publish it.
    fn commit<F>(&self, op: Operation, f: F) -> Result<Cart, CartError>
    where
        F: FnOnce(&Cart) -> Result<Cart, CartError>,
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let next = {
            let current = self.state.borrow();
            f(&current)?
        };

        if let Err(e) = self.repository.save(&next) {
            tracing::error!(operation = %op, error = %e, "failed to persist cart");
            return Err(e);
        }

        self.state.send_replace(next.clone());
        tracing::info!(
            operation = %op,
            items = next.unique_item_count(),
            units = next.item_count(),
            "cart updated"
        );
        Ok(next)
    }
}
