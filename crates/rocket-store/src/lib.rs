//! Observable, persisted shopping-cart store for RocketCart.
//!
//! - `CartStore` - owns the cart snapshot, checks stock, publishes and persists
//! - `CartRepository` - reads and writes the snapshot through a `KvStore`
//! - `CartHandle` - UI-facing wrapper that turns failures into notifications
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rocket_cache::{Cache, FileStore};
//! use rocket_store::{CartHandle, CartRepository, CartStore, LogSink};
//!
//! let repository = CartRepository::new(Cache::new(FileStore::open(".rocket")?));
//! let store = Arc::new(CartStore::open(Arc::new(inventory), repository)?);
//! let cart = CartHandle::new(store, Arc::new(LogSink));
//!
//! cart.add_product(ProductId::new(1)).await;
//! ```

mod handle;
mod notify;
mod repository;
mod store;

#[cfg(test)]
mod testing;

pub use handle::CartHandle;
pub use notify::{user_message, LogSink, NotificationSink, Operation};
pub use repository::{CartRepository, CART_STORAGE_KEY};
pub use store::{CartStore, UpdateProductAmount};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartHandle, CartRepository, CartStore, NotificationSink, Operation, UpdateProductAmount,
    };
    pub use rocket_commerce::prelude::*;
}
