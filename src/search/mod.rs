//! Search Service Module
//!
//! The aggregate search and recommendation behind `/api/search`.
//!
//! ## Overview
//! One request scores every monastery, archive item and festival in the catalog against
//! the query, links archive hits back to their monasteries, pulls in the festivals of
//! every matched monastery, and suggests unvisited monasteries similar to the ones the
//! visitor has already seen.
//!
//! The computation is synchronous and total: it reads the shared catalog, never
//! mutates it, and has no failure path.
//!
//! ## Submodules
//! - **`scorer`**: The exact / prefix / substring match ladder.
//! - **`engine`**: Per-collection ranking, festival merge and dedupe.
//! - **`recommend`**: District and tag overlap scoring.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`types`**: Hits and the response DTOs.

pub mod engine;
pub mod handlers;
pub mod recommend;
pub mod scorer;
pub mod types;
