//! Stock levels and the inventory lookup trait.

use crate::catalog::Product;
use crate::error::InventoryError;
use crate::ids::ProductId;
use async_trait::async_trait;

/// Available quantity for a product, as reported by the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockInfo {
    /// Product the stock belongs to.
    pub id: ProductId,
    /// Units available.
    pub amount: u32,
}

impl StockInfo {
    pub fn new(id: ProductId, amount: u32) -> Self {
        Self { id, amount }
    }

    /// Check if one more unit can be added on top of `current`.
    pub fn allows_increment(&self, current: u32) -> bool {
        self.amount > current
    }

    /// Check if a requested total quantity fits in stock.
    pub fn can_fulfill(&self, requested: i64) -> bool {
        requested <= i64::from(self.amount)
    }
}

/// Read-only lookup of stock and catalog data.
///
/// Implemented by the HTTP client in `rocket-data` and by in-memory fakes
/// in tests.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Get the available stock for a product.
    async fn stock(&self, id: ProductId) -> Result<StockInfo, InventoryError>;

    /// Get the catalog record for a product.
    async fn product(&self, id: ProductId) -> Result<Product, InventoryError>;
}
