//! Product grid with incremental "Load More" pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `ProductsState` for the committed search term. A term change
//! restarts pagination from offset 0; the Load More button and the retry
//! button both request the next page through the same guarded path, so at
//! most one catalog request is in flight. Cards are keyed by product id so
//! appending a page mounts only the new cards.

#[cfg(test)]
#[path = "product_grid_test.rs"]
mod product_grid_test;

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::net::catalog::HttpCatalog;
use crate::net::types::{CatalogError, Product};
use crate::state::products::{GridView, LoadMore, ProductsState, fetch_page};

#[component]
pub fn ProductGrid(#[prop(into)] search: Signal<String>) -> impl IntoView {
    let catalog = expect_context::<HttpCatalog>();
    let products = RwSignal::new(ProductsState::default());

    let fetch_next = Callback::new(move |()| {
        let Some(request) = products.try_update(ProductsState::begin_fetch).flatten() else {
            return;
        };
        let catalog = catalog.clone();
        leptos::task::spawn_local(async move {
            let result = fetch_page(&catalog, &request).await;
            // The grid may have been unmounted while the request was out.
            let _ = products.try_update(|s| s.finish(&request, result));
        });
    });

    Effect::new(move || {
        let term = search.get();
        let should_fetch = products
            .try_update(|s| {
                s.switch_term(&term);
                s.needs_first_page()
            })
            .unwrap_or(false);
        if should_fetch {
            fetch_next.run(());
        }
    });

    let grid_view = Memo::new(move |_| products.with(ProductsState::grid_view));
    let load_more = Memo::new(move |_| products.with(ProductsState::load_more));
    let error_message = move || {
        products.with(|s| s.error().map(CatalogError::user_message).unwrap_or_default())
    };

    move || match grid_view.get() {
        GridView::Loading => view! { <p class="grid-message">"Loading products..."</p> }.into_any(),
        GridView::Failed => view! {
            <div class="grid-message grid-message--error">
                <p>{error_message}</p>
                <button class="btn" on:click=move |_| fetch_next.run(())>
                    "Try again"
                </button>
            </div>
        }
        .into_any(),
        GridView::NoResults => view! { <p class="grid-message">"No products found."</p> }.into_any(),
        GridView::Products => view! {
            <div class="product-grid">
                <div class="product-grid__cards">
                    <For
                        each=move || products.with(|s| s.products().cloned().collect::<Vec<_>>())
                        key=card_key
                        let:product
                    >
                        <ProductCard product=product/>
                    </For>
                </div>
                <Show when=move || products.with(|s| s.error().is_some())>
                    <p class="grid-message grid-message--error">{error_message}</p>
                </Show>
                {move || load_more_button(load_more.get(), fetch_next)}
            </div>
        }
        .into_any(),
    }
}

/// Identity of a rendered card.
pub fn card_key(product: &Product) -> u64 {
    product.id
}

/// Label for the Load More button; `None` hides it.
pub fn load_more_label(state: LoadMore) -> Option<&'static str> {
    match state {
        LoadMore::Hidden => None,
        LoadMore::Idle => Some("Load More"),
        LoadMore::Busy => Some("Loading more..."),
    }
}

fn load_more_button(state: LoadMore, fetch_next: Callback<()>) -> Option<impl IntoView> {
    let label = load_more_label(state)?;
    let busy = state == LoadMore::Busy;
    Some(view! {
        <button class="btn load-more" disabled=busy on:click=move |_| fetch_next.run(())>
            {label}
        </button>
    })
}
