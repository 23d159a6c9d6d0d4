//! HTTP client for the remote product catalog.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: requests fail with [`CatalogError::Unavailable`] since the
//! endpoints are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures are returned as-is. There is no
//! retry and no caching here; the pagination controller owns both concerns.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use async_trait::async_trait;

use super::types::{CatalogError, ProductsPage};
use crate::config::AppConfig;

/// Source of catalog pages. Futures are `!Send` because the browser event
/// loop is single-threaded.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch the plain product listing starting at `skip`.
    async fn fetch_page(&self, skip: u32) -> Result<ProductsPage, CatalogError>;

    /// Fetch search results for `query` starting at `skip`.
    async fn fetch_search_page(&self, query: &str, skip: u32) -> Result<ProductsPage, CatalogError>;

    /// Route a search term to the listing or search endpoint.
    ///
    /// A blank term browses the full catalog; anything else is trimmed and
    /// searched.
    async fn fetch_for_term(&self, term: &str, skip: u32) -> Result<ProductsPage, CatalogError> {
        match search_query(term) {
            Some(query) => self.fetch_search_page(query, skip).await,
            None => self.fetch_page(skip).await,
        }
    }
}

/// Normalize a search term; `None` means "browse everything".
pub fn search_query(term: &str) -> Option<&str> {
    let trimmed = term.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

pub(crate) fn products_endpoint(base_url: &str) -> String {
    format!("{base_url}/products")
}

pub(crate) fn search_endpoint(base_url: &str) -> String {
    format!("{base_url}/products/search")
}

pub(crate) fn page_params(limit: u32, skip: u32) -> Vec<(&'static str, String)> {
    vec![("limit", limit.to_string()), ("skip", skip.to_string())]
}

pub(crate) fn search_params(query: &str, limit: u32, skip: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![("q", query.to_owned())];
    params.extend(page_params(limit, skip));
    params
}

/// Catalog client bound to one API root and a fixed page size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpCatalog {
    base_url: String,
    page_limit: u32,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>, page_limit: u32) -> Self {
        Self { base_url: base_url.into(), page_limit }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.page_limit)
    }

    #[cfg(feature = "csr")]
    async fn get_page(&self, url: &str, params: Vec<(&'static str, String)>) -> Result<ProductsPage, CatalogError> {
        let resp = gloo_net::http::Request::get(url)
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(CatalogError::Status { status: resp.status() });
        }
        resp.json::<ProductsPage>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, skip: u32) -> Result<ProductsPage, CatalogError> {
        #[cfg(feature = "csr")]
        {
            let url = products_endpoint(&self.base_url);
            self.get_page(&url, page_params(self.page_limit, skip)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = skip;
            Err(CatalogError::Unavailable)
        }
    }

    async fn fetch_search_page(&self, query: &str, skip: u32) -> Result<ProductsPage, CatalogError> {
        #[cfg(feature = "csr")]
        {
            let url = search_endpoint(&self.base_url);
            self.get_page(&url, search_params(query, self.page_limit, skip)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (query, skip);
            Err(CatalogError::Unavailable)
        }
    }
}
