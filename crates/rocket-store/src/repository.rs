//! Snapshot persistence for the cart.

use rocket_cache::{cache_key, Cache, CacheError};
use rocket_commerce::{Cart, CartError};

/// Storage key of the cart snapshot.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Reads and writes the cart snapshot under a single key.
#[derive(Clone)]
pub struct CartRepository {
    cache: Cache,
    key: String,
}

impl CartRepository {
    /// Repository using the default storage key.
    pub fn new(cache: Cache) -> Self {
        Self {
            cache,
            key: CART_STORAGE_KEY.to_string(),
        }
    }

    /// Repository scoped to a namespace, e.g. `@RocketShoes` gives `@RocketShoes:cart`.
    pub fn namespaced(cache: Cache, namespace: &str) -> Self {
        Self {
            cache,
            key: cache_key!(namespace, "cart"),
        }
    }

    /// Override the storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted cart.
    ///
    /// A missing snapshot yields an empty cart. So does a snapshot that
    /// cannot be decoded or breaks cart invariants; it is logged and left
    /// to be overwritten by the next mutation. Only a failing read of the
    /// store itself is an error.
    pub fn load(&self) -> Result<Cart, CartError> {
        match self.cache.get::<Cart>(&self.key) {
            Ok(Some(cart)) => {
                tracing::debug!(key = %self.key, items = cart.unique_item_count(), "loaded cart snapshot");
                Ok(cart)
            }
            Ok(None) => {
                tracing::debug!(key = %self.key, "no cart snapshot, starting empty");
                Ok(Cart::new())
            }
            Err(CacheError::SerializeError(e)) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable cart snapshot");
                Ok(Cart::new())
            }
            Err(e) => Err(CartError::Storage(e.to_string())),
        }
    }

    /// Overwrite the persisted snapshot.
    pub fn save(&self, cart: &Cart) -> Result<(), CartError> {
        self.cache
            .set(&self.key, cart)
            .map_err(|e| CartError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{product, FailingStore};
    use rocket_cache::MemoryStore;
    use rocket_commerce::ProductId;
    use serde_json::json;

    #[test]
    fn test_missing_snapshot_is_empty() {
        let repo = CartRepository::new(Cache::new(MemoryStore::new()));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let repo = CartRepository::new(Cache::new(MemoryStore::new()));
        let cart = Cart::new()
            .with_new_item(product(1))
            .and_then(|c| c.with_incremented(ProductId::new(1)))
            .unwrap();

        repo.save(&cart).unwrap();
        assert_eq!(repo.load().unwrap(), cart);
    }

    #[test]
    fn test_catalog_fields_survive_save_and_load() {
        let mut shoe = product(1);
        shoe.extra.insert("brand".into(), json!("Rocket"));
        shoe.extra.insert("sizes".into(), json!([38, 39, 40]));
        shoe.extra.insert("amount".into(), json!(12));
        let mut cap = product(2);
        cap.extra.insert("amount".into(), json!(0));

        let cart = Cart::new()
            .with_new_item(shoe)
            .and_then(|c| c.with_new_item(cap))
            .and_then(|c| c.with_incremented(ProductId::new(1)))
            .and_then(|c| c.with_incremented(ProductId::new(1)))
            .unwrap();

        let cache = Cache::new(MemoryStore::new());
        let repo = CartRepository::new(cache.clone());
        repo.save(&cart).unwrap();

        let raw: Vec<serde_json::Value> = cache.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw[0]["amount"], 3);
        assert_eq!(raw[0]["brand"], "Rocket");
        assert_eq!(raw[1]["amount"], 1);

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, cart);
        assert_eq!(loaded.amount_of(ProductId::new(1)), 3);
        assert_eq!(loaded.items()[0].product.extra["sizes"], json!([38, 39, 40]));

        repo.save(&loaded).unwrap();
        assert_eq!(repo.load().unwrap(), cart);
    }

    #[test]
    fn test_corrupt_snapshot_is_discarded() {
        let store = MemoryStore::with_entry(CART_STORAGE_KEY, "{{ nope");
        let repo = CartRepository::new(Cache::new(store));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_with_duplicates_is_discarded() {
        let raw = json!([
            { "id": 1, "title": "a", "price": 1.0, "image": "i", "amount": 1 },
            { "id": 1, "title": "a", "price": 1.0, "image": "i", "amount": 2 }
        ]);
        let store = MemoryStore::with_entry(CART_STORAGE_KEY, raw.to_string());
        let repo = CartRepository::new(Cache::new(store));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_namespaced_key() {
        let repo = CartRepository::namespaced(Cache::new(MemoryStore::new()), "@RocketShoes");
        assert_eq!(repo.key(), CART_STORAGE_KEY);
        assert_eq!(repo.with_key("other").key(), "other");
    }

    #[test]
    fn test_storage_failures_surface() {
        let repo = CartRepository::new(Cache::new(FailingStore));
        assert!(matches!(repo.load(), Err(CartError::Storage(_))));
        assert!(matches!(repo.save(&Cart::new()), Err(CartError::Storage(_))));
    }
}
