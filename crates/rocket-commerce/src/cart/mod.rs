//! Shopping cart module.
//!
//! Contains the cart value and its line items.

mod cart;

pub use cart::{Cart, LineItem};
