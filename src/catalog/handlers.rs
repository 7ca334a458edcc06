use super::store::Catalog;
use super::types::{ArchiveRecord, ErrorResponse, HealthResponse};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_list_monasteries(Extension(catalog): Extension<Arc<Catalog>>) -> Response {
    Json(catalog.monasteries()).into_response()
}

pub async fn handle_get_monastery(
    Path(id): Path<String>,
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Response {
    match catalog.monastery(&id) {
        Some(monastery) => (StatusCode::OK, Json(monastery)).into_response(),
        None => {
            tracing::debug!("Monastery {} not found", id);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("monastery {} not found", id),
                }),
            )
                .into_response()
        }
    }
}

pub async fn handle_list_archives(
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Json<Vec<ArchiveRecord>> {
    Json(catalog.archives().to_vec())
}

pub async fn handle_health(Extension(catalog): Extension<Arc<Catalog>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        monasteries: catalog.monasteries().len(),
        archives: catalog.archives().len(),
    })
}
