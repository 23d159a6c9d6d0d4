//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::AppConfig;
use crate::net::catalog::HttpCatalog;
use crate::pages::catalog::CatalogPage;
use crate::state::favorites::FavoritesState;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Provides the config, the catalog client, and the favorites state to every
/// child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let catalog = HttpCatalog::from_config(&config);
    let favorites = RwSignal::new(FavoritesState::new(BrowserStorage, config.favorites_key.clone()));

    provide_context(config);
    provide_context(catalog);
    provide_context(favorites);

    // Effects run after the first render, so cards show their pending state
    // until stored favorites are known.
    Effect::new(move || favorites.update(|f| f.load()));

    view! {
        <Title text="ShopScope"/>
        <CatalogPage/>
    }
}
