//! Catalog Module
//!
//! The read-only data providers behind search: monasteries (with their festivals)
//! and digitized archive items.
//!
//! ## Lifecycle
//! The catalog is loaded once at startup from one of three sources (the embedded seed
//! dataset, a JSON file, or a remote URL), validated, indexed, and then shared
//! immutably with every request handler.
//!
//! ## Submodules
//! - **`types`**: Record shapes and response DTOs.
//! - **`store`**: The indexed, immutable `Catalog`.
//! - **`loader`**: Source selection, remote fetch with retry, JSON parsing.
//! - **`handlers`**: Browse endpoints for the frontend detail pages.

pub mod handlers;
pub mod loader;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
