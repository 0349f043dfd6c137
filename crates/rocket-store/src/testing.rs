//! Fakes for store tests.

use async_trait::async_trait;
use rocket_cache::{CacheError, KvStore};
use rocket_commerce::catalog::{InventoryService, Product, StockInfo};
use rocket_commerce::{InventoryError, ProductId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::NotificationSink;

pub fn product(id: u64) -> Product {
    Product::new(
        ProductId::new(id),
        format!("Tênis {}", id),
        100.0 + id as f64,
        format!("https://img/{}.jpg", id),
    )
}

/// Inventory answering from fixed tables.
///
/// Products without a stock entry are not found; ids listed in `offline`
/// fail as if the API were down.
#[derive(Default)]
pub struct FakeInventory {
    stock: HashMap<ProductId, u32>,
    offline: Vec<ProductId>,
    stock_calls: AtomicUsize,
    product_calls: AtomicUsize,
}

impl FakeInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(mut self, id: u64, amount: u32) -> Self {
        self.stock.insert(ProductId::new(id), amount);
        self
    }

    pub fn offline(mut self, id: u64) -> Self {
        self.offline.push(ProductId::new(id));
        self
    }

    pub fn stock_calls(&self) -> usize {
        self.stock_calls.load(Ordering::SeqCst)
    }

    pub fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InventoryService for FakeInventory {
    async fn stock(&self, id: ProductId) -> Result<StockInfo, InventoryError> {
        self.stock_calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.contains(&id) {
            return Err(InventoryError::Transport("connection refused".to_string()));
        }
        self.stock
            .get(&id)
            .map(|amount| StockInfo::new(id, *amount))
            .ok_or(InventoryError::NotFound(id))
    }

    async fn product(&self, id: ProductId) -> Result<Product, InventoryError> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        if self.stock.contains_key(&id) {
            Ok(product(id.get()))
        } else {
            Err(InventoryError::NotFound(id))
        }
    }
}

/// Sink that remembers every message.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl NotificationSink for RecordingSink {
    fn notify_error(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// Store whose every operation fails.
pub struct FailingStore;

impl KvStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::StoreError("disk unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
        Err(CacheError::StoreError("disk unavailable".to_string()))
    }
}

/// Store that reads fine but refuses writes.
#[derive(Default)]
pub struct ReadOnlyStore {
    inner: rocket_cache::MemoryStore,
}

impl ReadOnlyStore {
    pub fn with_entry(key: &str, value: &[u8]) -> Self {
        Self {
            inner: rocket_cache::MemoryStore::with_entry(key, value.to_vec()),
        }
    }
}

impl KvStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
        Err(CacheError::StoreError("read-only".to_string()))
    }
}
