//! Cart and catalog domain types for RocketCart.
//!
//! This crate holds the pure part of the storefront cart:
//!
//! - **Catalog**: Products, stock levels, and the `InventoryService` lookup trait
//! - **Cart**: Line items and the cart value with its mutation rules
//! - **Money**: Cents-based prices for cart totals
//!
//! Everything here is synchronous and free of I/O except the
//! `InventoryService` trait, which adapters implement.
//!
//! # Example
//!
//! ```rust
//! use rocket_commerce::prelude::*;
//!
//! let sneaker = Product::new(ProductId::new(1), "Tênis de Caminhada", 179.9, "https://img/1.jpg");
//! let cart = Cart::new().with_new_item(sneaker).unwrap();
//!
//! assert_eq!(cart.amount_of(ProductId::new(1)), 1);
//! assert_eq!(cart.total(Currency::BRL).unwrap().display(), "R$179.90");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use cart::{Cart, LineItem};
pub use error::{CartError, InventoryError};
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CartError, InventoryError};
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{InventoryService, Product, StockInfo};

    // Cart
    pub use crate::cart::{Cart, LineItem};
}
