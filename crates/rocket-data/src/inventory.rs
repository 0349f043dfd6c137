//! Storefront API adapter for stock and catalog lookups.

use crate::{FetchClient, FetchError, Response};
use async_trait::async_trait;
use rocket_commerce::catalog::{InventoryService, Product, StockInfo};
use rocket_commerce::{InventoryError, ProductId};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// `InventoryService` backed by the storefront REST API.
///
/// - `GET /stock/{id}` returns `{ "amount": .. }`, possibly with more fields
/// - `GET /products/{id}` returns the catalog record
#[derive(Debug, Clone)]
pub struct HttpInventory {
    client: FetchClient,
}

impl HttpInventory {
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    async fn fetch<T: DeserializeOwned>(&self, id: ProductId, path: &str) -> Result<T, InventoryError> {
        let response = self.client.get(path).await.map_err(|e| {
            tracing::warn!(product_id = %id, path, error = %e, "inventory request failed");
            match e {
                FetchError::Timeout => InventoryError::Transport("request timed out".to_string()),
                other => InventoryError::Transport(other.to_string()),
            }
        })?;

        tracing::debug!(product_id = %id, path, status = response.status, "inventory response");
        decode(id, response)
    }
}

fn decode<T: DeserializeOwned>(id: ProductId, response: Response) -> Result<T, InventoryError> {
    if response.is_not_found() {
        return Err(InventoryError::NotFound(id));
    }
    let response = response.error_for_status().map_err(|e| match e {
        FetchError::HttpError { status, message } => InventoryError::Http { status, message },
        other => InventoryError::Transport(other.to_string()),
    })?;
    response
        .json()
        .map_err(|e| InventoryError::Decode(e.to_string()))
}

/// Body of `GET /stock/{id}`. Only `amount` is read; the id is the one asked for.
#[derive(Deserialize)]
struct StockBody {
    amount: u32,
}

#[async_trait]
impl InventoryService for HttpInventory {
    async fn stock(&self, id: ProductId) -> Result<StockInfo, InventoryError> {
        let body: StockBody = self.fetch(id, &format!("/stock/{}", id)).await?;
        Ok(StockInfo::new(id, body.amount))
    }

    async fn product(&self, id: ProductId) -> Result<Product, InventoryError> {
        self.fetch(id, &format!("/products/{}", id)).await
    }
}
