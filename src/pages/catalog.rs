//! Catalog page: header, favorites badge, search, and the product grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The committed search term lives here. `SearchBar` writes it once typing
//! pauses and `ProductGrid` restarts pagination whenever it changes.

use leptos::prelude::*;

use crate::components::favorites_badge::FavoritesBadge;
use crate::components::product_grid::ProductGrid;
use crate::components::search_bar::SearchBar;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let on_search = Callback::new(move |term: String| search.set(term));

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header">
                <h1>"🛍️ ShopScope"</h1>
                <FavoritesBadge/>
            </header>
            <SearchBar on_search=on_search/>
            <ProductGrid search=search/>
        </div>
    }
}
