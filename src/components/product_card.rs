//! Card for a single product with its favorite toggle.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::favorites::FavoritesState;

/// Icon for the favorite button. Membership is unknown until loaded.
pub fn favorite_icon(ready: bool, favorite: bool) -> &'static str {
    match (ready, favorite) {
        (false, _) => "⏳",
        (true, true) => "❤️",
        (true, false) => "🤍",
    }
}

pub fn favorite_button_title(favorite: bool) -> &'static str {
    if favorite { "Remove from favorites" } else { "Add to favorites" }
}

pub fn price_label(price: f64) -> String {
    format!("${price}")
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoritesState>>();
    let id = product.id;
    let title = product.title.clone();
    let thumbnail = product.thumbnail.clone();
    let price = price_label(product.price);

    let loading = move || favorites.with(|f| !f.is_ready());
    let is_favorite = move || favorites.with(|f| f.is_favorite(id));
    let icon = move || favorites.with(|f| favorite_icon(f.is_ready(), f.is_favorite(id)));

    view! {
        <div class="product-card">
            <img class="product-card__image" src=thumbnail alt=title.clone()/>
            <h3 class="product-card__title">{title}</h3>
            <p class="product-card__price">{price}</p>
            <button
                class="product-card__favorite"
                class:product-card__favorite--active=is_favorite
                disabled=loading
                title=move || favorite_button_title(is_favorite())
                on:click=move |_| favorites.update(|f| f.toggle(product.clone()))
            >
                {icon}
            </button>
        </div>
    }
}
