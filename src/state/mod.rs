//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`favorites`, `products`) so components depend on
//! small focused models. Both are plain structs wrapped in `RwSignal` and
//! provided through Leptos context.

pub mod favorites;
pub mod products;
