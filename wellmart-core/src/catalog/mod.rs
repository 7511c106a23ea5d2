//! Read-only product catalog client.
//!
//! Talks to a DummyJSON-style REST API:
//! - `GET /products?limit=N` returns `{ "products": [...] }`
//! - `GET /products/{id}` returns a single product
//!
//! There is no authentication, timeout or retry.

mod client;

pub use client::{CatalogClient, DEFAULT_CATALOG_URL};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to fetch product {id}: server returned {status}")]
    Status {
        id: u64,
        status: reqwest::StatusCode,
    },
}
