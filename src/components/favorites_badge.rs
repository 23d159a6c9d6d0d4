//! Header badge counting favorited products.

#[cfg(test)]
#[path = "favorites_badge_test.rs"]
mod favorites_badge_test;

use leptos::prelude::*;

use crate::state::favorites::FavoritesState;

/// Badge text for `count` favorites; `None` hides the badge. Nothing is
/// shown until stored favorites are loaded.
pub fn badge_text(ready: bool, count: usize) -> Option<String> {
    match (ready, count) {
        (false, _) | (true, 0) => None,
        (true, 1) => Some("❤️ 1 favorite".to_owned()),
        (true, n) => Some(format!("❤️ {n} favorites")),
    }
}

#[component]
pub fn FavoritesBadge() -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoritesState>>();
    let label = move || favorites.with(|f| badge_text(f.is_ready(), f.len()));

    move || label().map(|text| view! { <div class="favorites-badge">{text}</div> })
}
