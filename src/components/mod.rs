//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod favorites_badge;
pub mod product_card;
pub mod product_grid;
pub mod search_bar;
