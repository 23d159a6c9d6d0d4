//! Networking modules for the remote catalog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `catalog` issues the HTTP requests and `types` defines the wire schema and
//! the error taxonomy surfaced to the product grid.

pub mod catalog;
pub mod types;
