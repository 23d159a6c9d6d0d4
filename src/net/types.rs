//! Catalog wire types and fetch errors.
//!
//! The catalog API returns far richer product records than the UI needs;
//! unknown fields are ignored on decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// PRODUCT
// =============================================================================

/// A catalog product as rendered by a card and stored as a favorite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub thumbnail: String,
}

// =============================================================================
// PAGE
// =============================================================================

/// One fetched batch of products plus its pagination metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

impl ProductsPage {
    /// Offset of the page that would follow this one.
    pub fn next_skip(&self) -> u32 {
        self.skip.saturating_add(self.limit)
    }

    /// Whether the server holds products beyond this page.
    ///
    /// A zero `limit` never advances the cursor, so it ends pagination.
    pub fn has_more(&self) -> bool {
        self.limit > 0 && self.next_skip() < self.total
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by catalog fetches. None are retried automatically.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("catalog request failed: {0}")]
    Request(String),

    /// The catalog answered with a non-success HTTP status.
    #[error("catalog responded with status {status}")]
    Status { status: u16 },

    /// The response body was not a products page.
    #[error("catalog response decode failed: {0}")]
    Decode(String),

    /// No browser HTTP stack is compiled in.
    #[error("catalog is not available outside the browser")]
    Unavailable,
}

impl CatalogError {
    /// Message shown in the grid's error state.
    pub fn user_message(&self) -> &'static str {
        "Error loading products. Please try again."
    }
}
