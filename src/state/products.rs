//! Incremental pagination over the catalog for the active search term.
//!
//! DESIGN
//! ======
//! `ProductsState` is an append-only list of pages for one search term.
//! Fetching is split in two so the state stays synchronous and the network
//! call can run on the event loop between the halves:
//!
//! 1. [`ProductsState::begin_fetch`] claims the single in-flight slot and
//!    returns a [`PageRequest`], or `None` when a fetch is pending or the
//!    term is exhausted.
//! 2. [`ProductsState::finish`] applies the outcome.
//!
//! Requests carry the generation they were issued under. A term change bumps
//! the generation, so a response for a superseded term is dropped instead
//! of landing in the new term's list.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::catalog::CatalogSource;
use crate::net::types::{CatalogError, Product, ProductsPage};

/// A claimed fetch for one page of one search term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub term: String,
    pub skip: u32,
    generation: u64,
}

/// What the product grid should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridView {
    /// First page for this term not here yet.
    Loading,
    /// First page for this term failed.
    Failed,
    /// First page arrived with zero products.
    NoResults,
    Products,
}

/// State of the "Load More" control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMore {
    Hidden,
    Idle,
    Busy,
}

/// Pages fetched so far for the active search term.
#[derive(Clone, Debug, Default)]
pub struct ProductsState {
    term: String,
    pages: Vec<ProductsPage>,
    next_skip: u32,
    exhausted: bool,
    fetching: bool,
    error: Option<CatalogError>,
    generation: u64,
}

impl ProductsState {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into(), ..Self::default() }
    }

    /// Discard every page and restart at offset 0 for `term`.
    pub fn reset(&mut self, term: impl Into<String>) {
        *self = Self { term: term.into(), generation: self.generation.wrapping_add(1), ..Self::default() };
    }

    /// Reset only if `term` differs from the active one.
    pub fn switch_term(&mut self, term: &str) -> bool {
        if self.term == term {
            return false;
        }
        self.reset(term);
        true
    }

    /// Claim the in-flight slot for the next page.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        if self.fetching || self.exhausted {
            return None;
        }
        self.fetching = true;
        self.error = None;
        Some(PageRequest { term: self.term.clone(), skip: self.next_skip, generation: self.generation })
    }

    /// Apply the outcome of `request`. Returns `false` if the request was
    /// issued for a term that has since been replaced.
    pub fn finish(&mut self, request: &PageRequest, result: Result<ProductsPage, CatalogError>) -> bool {
        if request.generation != self.generation {
            log::debug!("dropping stale page for {:?} at skip {}", request.term, request.skip);
            return false;
        }
        self.fetching = false;
        match result {
            Ok(page) => {
                self.next_skip = page.next_skip();
                self.exhausted = !page.has_more();
                log::debug!(
                    "page for {:?}: skip {} limit {} total {}",
                    self.term,
                    page.skip,
                    page.limit,
                    page.total
                );
                self.pages.push(page);
            }
            Err(e) => {
                log::warn!("catalog fetch for {:?} at skip {} failed: {e}", request.term, request.skip);
                self.error = Some(e);
            }
        }
        true
    }

    /// True before anything has been requested for the active term.
    pub fn needs_first_page(&self) -> bool {
        self.pages.is_empty() && !self.fetching && self.error.is_none()
    }

    /// All products fetched so far, in fetch order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.pages.iter().flat_map(|page| page.products.iter())
    }

    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.error.as_ref()
    }

    pub fn grid_view(&self) -> GridView {
        match self.pages.first() {
            None if self.error.is_some() => GridView::Failed,
            None => GridView::Loading,
            Some(first) if first.is_empty() => GridView::NoResults,
            Some(_) => GridView::Products,
        }
    }

    pub fn load_more(&self) -> LoadMore {
        if self.pages.is_empty() || self.exhausted {
            LoadMore::Hidden
        } else if self.fetching {
            LoadMore::Busy
        } else {
            LoadMore::Idle
        }
    }
}

/// Fetch `request` from `catalog`, routing blank terms to the plain listing.
///
/// # Errors
///
/// Propagates the catalog's error unchanged.
pub async fn fetch_page<C>(catalog: &C, request: &PageRequest) -> Result<ProductsPage, CatalogError>
where
    C: CatalogSource + ?Sized,
{
    catalog.fetch_for_term(&request.term, request.skip).await
}
