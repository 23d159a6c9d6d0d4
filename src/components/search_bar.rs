//! Free-text product search input.
//!
//! DESIGN
//! ======
//! Keystrokes update the visible text immediately, while `on_search` only
//! receives the value once typing has paused for the configured interval.
//! Enter commits right away. The pending emission is cancelled when the
//! component is torn down.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::util::debounce::Debouncer;

#[component]
pub fn SearchBar(on_search: Callback<String>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let text = RwSignal::new(String::new());
    let debouncer = StoredValue::new_local(Debouncer::new(config.debounce(), move |term: String| {
        on_search.run(term);
    }));

    on_cleanup(move || {
        let _ = debouncer.try_with_value(Debouncer::cancel);
    });

    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="text"
                placeholder="Search products"
                prop:value=move || text.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    text.set(value.clone());
                    debouncer.with_value(|d| d.push(value));
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        debouncer.with_value(|d| {
                            d.flush();
                        });
                    }
                }
            />
        </div>
    }
}
