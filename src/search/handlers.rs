use super::engine::{parse_visited, search};
use super::types::SearchParams;
use crate::catalog::store::Catalog;
use axum::extract::Query;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /api/search?q=..&visited=id1,id2`
///
/// Never fails: missing parameters default to empty.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Response {
    let query = params.q.unwrap_or_default();
    let visited = parse_visited(params.visited.as_deref().unwrap_or(""));

    let result = search(&catalog, &query, &visited);
    Json(result).into_response()
}
