//! Persistent Key-Value storage for RocketCart.
//!
//! The cart keeps a single serialized snapshot under a fixed key, the way a
//! browser storefront keeps it in local storage. This crate provides the
//! storage seam (`KvStore`), two backends, and a typed JSON wrapper.
//!
//! # Example
//!
//! ```rust
//! use rocket_cache::{cache_key, Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//! let key = cache_key!("@RocketShoes", "cart");
//!
//! cache.set(&key, &vec![1, 2, 3]).unwrap();
//! let value: Option<Vec<u32>> = cache.get(&key).unwrap();
//! assert_eq!(value, Some(vec![1, 2, 3]));
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KvStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
