//! Cart error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors returned by inventory lookups.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// The inventory has no record for the product.
    #[error("Product not found in inventory: {0}")]
    NotFound(ProductId),

    /// The inventory endpoint answered with an unexpected status.
    #[error("Inventory returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The inventory endpoint could not be reached.
    #[error("Inventory unreachable: {0}")]
    Transport(String),

    /// The inventory response could not be decoded.
    #[error("Invalid inventory response: {0}")]
    Decode(String),
}

/// Errors that can occur in cart operations.
///
/// None of these are fatal to the store; each leaves the cart unchanged.
#[derive(Error, Debug)]
pub enum CartError {
    /// The requested quantity is not available.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: i64,
        available: u32,
    },

    /// No line item exists for the product.
    #[error("Item not in cart: {0}")]
    NotFound(ProductId),

    /// The inventory lookup backing an operation failed.
    #[error("Inventory lookup failed during {operation}: {source}")]
    LookupFailed {
        operation: &'static str,
        #[source]
        source: InventoryError,
    },

    /// Amount would no longer fit in a line item.
    #[error("Arithmetic overflow in line item amount")]
    Overflow,

    /// The snapshot could not be written to storage.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The snapshot could not be decoded or violates cart invariants.
    #[error("Invalid cart snapshot: {0}")]
    InvalidSnapshot(String),
}

impl CartError {
    /// Wrap an inventory failure for the named operation.
    pub fn lookup(operation: &'static str, source: InventoryError) -> Self {
        CartError::LookupFailed { operation, source }
    }

    /// Whether this error came from a stock check.
    pub fn is_stock_exceeded(&self) -> bool {
        matches!(self, CartError::StockExceeded { .. })
    }
}
