//! DharmaTech Monastery Search Library
//!
//! Backend for the search box and recommendation strip of the DharmaTech Sikkim
//! tourism app. It serves the binary executable (`main.rs`) and the integration tests.
//!
//! ## Architecture Modules
//! - **`catalog`**: The read-only data layer. Loads the monastery and archive datasets
//!   once at startup (embedded, file, or remote URL), validates and indexes them, and
//!   exposes browse endpoints.
//! - **`search`**: The core information retrieval logic. Match scoring, per-collection
//!   ranking, festival aggregation and visit-based recommendations.
//! - **`config`**: Score tiers, result limits and server defaults.

pub mod catalog;
pub mod config;
pub mod search;

use axum::http::{Method, header::CONTENT_TYPE};
use axum::{Extension, Router, routing::get};
use catalog::handlers::{
    handle_get_monastery, handle_health, handle_list_archives, handle_list_monasteries,
};
use catalog::store::Catalog;
use search::handlers::handle_search;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(catalog: Arc<Catalog>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/search", get(handle_search))
        .route("/api/monasteries", get(handle_list_monasteries))
        .route("/api/monasteries/:id", get(handle_get_monastery))
        .route("/api/archives", get(handle_list_archives))
        .route("/health", get(handle_health))
        .layer(Extension(catalog))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
