//! HTTP client utilities for RocketCart.
//!
//! Provides a small JSON-over-HTTP client and the `HttpInventory` adapter
//! that answers cart stock and catalog lookups from the storefront API.
//!
//! # Example
//!
//! ```rust,ignore
//! use rocket_data::{FetchClient, HttpInventory};
//! use rocket_commerce::prelude::*;
//!
//! let client = FetchClient::new()?.with_base_url("http://localhost:3333");
//! let inventory = HttpInventory::new(client);
//!
//! let stock = inventory.stock(ProductId::new(1)).await?;
//! println!("{} units left", stock.amount);
//! ```

mod error;
mod inventory;
mod response;

pub use error::FetchError;
pub use inventory::HttpInventory;
pub use response::Response;

use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for making outbound requests.
///
/// This is a thin wrapper around `reqwest::Client` that resolves relative
/// paths against a base URL and buffers responses.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl FetchClient {
    /// Create a new HTTP client with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP client with an explicit request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::RequestError(format!("failed to build client: {}", e)))?;
        Ok(Self {
            http,
            base_url: None,
        })
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Base URL, if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolve a path against the base URL.
    pub fn url(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) if !path.starts_with("http://") && !path.starts_with("https://") => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    path.trim_start_matches('/')
                )
            }
            _ => path.to_string(),
        }
    }

    /// Send a GET request and buffer the response.
    ///
    /// Non-2xx statuses are returned as a `Response`, not an error; callers
    /// decide how to map them.
    pub async fn get(&self, path: &str) -> Result<Response, FetchError> {
        let url = self.url(path);
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        Response::read(response).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, HttpInventory, Response};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = FetchClient::new()
            .unwrap()
            .with_base_url("http://localhost:3333/");
        assert_eq!(client.url("/stock/1"), "http://localhost:3333/stock/1");
        assert_eq!(client.url("products/2"), "http://localhost:3333/products/2");
    }

    #[test]
    fn test_absolute_url_bypasses_base() {
        let client = FetchClient::new()
            .unwrap()
            .with_base_url("http://localhost:3333");
        assert_eq!(
            client.url("https://api.example.com/stock/1"),
            "https://api.example.com/stock/1"
        );
    }

    #[test]
    fn test_no_base_url() {
        let client = FetchClient::new().unwrap();
        assert_eq!(client.base_url(), None);
        assert_eq!(client.url("/stock/1"), "/stock/1");
    }
}
