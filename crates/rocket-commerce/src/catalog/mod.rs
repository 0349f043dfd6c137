//! Product catalog module.
//!
//! Contains the product record, stock levels, and the inventory lookup trait.

mod inventory;
mod product;

pub use inventory::{InventoryService, StockInfo};
pub use product::Product;
