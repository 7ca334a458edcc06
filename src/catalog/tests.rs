//! Catalog Module Tests
//!
//! Validates dataset parsing, catalog validation and indexing, source loading and the
//! browse handlers.
//!
//! ## Test Scopes
//! - **Parsing**: Field defaults and wire names of the dataset JSON.
//! - **Catalog**: Id uniqueness, tag set semantics, name lookup.
//! - **Loader**: Embedded, file and remote sources (remote served from a local listener).
//! - **Handlers**: Browse endpoints and health.

#[cfg(test)]
mod tests {
    use crate::catalog::handlers::{
        handle_get_monastery, handle_health, handle_list_archives, handle_list_monasteries,
    };
    use crate::catalog::loader::{CatalogSource, load_catalog, parse_dataset};
    use crate::catalog::store::Catalog;
    use crate::catalog::types::Dataset;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Extension, Router};
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Arc;

    const SAMPLE: &str = r#"{
        "monasteries": [
            {
                "id": "rumtek",
                "name": "Rumtek Monastery",
                "location": "Gangtok",
                "description": "Seat of the Karmapa",
                "district": "East Sikkim",
                "tags": ["kagyu", "stupa", "kagyu"],
                "festivals": [{ "name": "Losar", "description": "New year" }]
            },
            {
                "id": "dubdi",
                "name": "Dubdi Monastery",
                "location": "Yuksom",
                "description": "Oldest monastery",
                "district": "West Sikkim"
            }
        ],
        "archives": [
            {
                "title": "Karmapa Thangkas",
                "monasteryName": "Rumtek Monastery",
                "description": "Painted scrolls",
                "century": "18th century",
                "type": "Thangka"
            }
        ]
    }"#;

    fn sample_catalog() -> Arc<Catalog> {
        Arc::new(Catalog::new(parse_dataset(SAMPLE).unwrap()).unwrap())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    // ============================================================
    // PARSING TESTS
    // ============================================================

    #[test]
    fn test_parse_dataset_defaults_optional_fields() {
        let dataset = parse_dataset(SAMPLE).unwrap();

        let dubdi = &dataset.monasteries[1];
        assert!(dubdi.tags.is_empty());
        assert!(dubdi.festivals.is_empty());
        assert!(dubdi.history.is_empty());
        assert!(dubdi.significance.is_empty());

        assert_eq!(dataset.archives[0].monastery_name, "Rumtek Monastery");
        assert_eq!(dataset.archives[0].archive_type, "Thangka");
    }

    #[test]
    fn test_parse_dataset_missing_collections() {
        let dataset = parse_dataset("{}").unwrap();
        assert!(dataset.monasteries.is_empty());
        assert!(dataset.archives.is_empty());
    }

    #[test]
    fn test_parse_dataset_rejects_malformed_json() {
        assert!(parse_dataset("{ \"monasteries\": [ { \"id\": 1 } ] }").is_err());
        assert!(parse_dataset("not json").is_err());
    }

    // ============================================================
    // CATALOG TESTS
    // ============================================================

    #[test]
    fn test_catalog_collapses_duplicate_tags() {
        let catalog = sample_catalog();
        let rumtek = catalog.monastery("rumtek").unwrap();

        assert_eq!(rumtek.tags, vec!["kagyu", "stupa"]);
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let mut dataset = parse_dataset(SAMPLE).unwrap();
        let copy = dataset.monasteries[0].clone();
        dataset.monasteries.push(copy);

        let err = Catalog::new(dataset).err().unwrap();
        assert!(err.to_string().contains("rumtek"));
    }

    #[test]
    fn test_catalog_rejects_empty_id() {
        let mut dataset = parse_dataset(SAMPLE).unwrap();
        dataset.monasteries[1].id = "  ".to_string();

        assert!(Catalog::new(dataset).is_err());
    }

    #[test]
    fn test_catalog_lookup_by_id() {
        let catalog = sample_catalog();

        assert_eq!(catalog.monastery("dubdi").unwrap().name, "Dubdi Monastery");
        assert!(catalog.monastery("DUBDI").is_none());
        assert!(catalog.monastery("missing").is_none());
    }

    #[test]
    fn test_catalog_lookup_by_name_ignores_case() {
        let catalog = sample_catalog();

        assert_eq!(
            catalog.monastery_by_name("rUmTeK mOnAsTeRy").unwrap().id,
            "rumtek"
        );
        assert!(catalog.monastery_by_name("Rumtek").is_none());
    }

    #[test]
    fn test_catalog_name_lookup_last_record_wins() {
        let mut dataset = parse_dataset(SAMPLE).unwrap();
        let mut twin = dataset.monasteries[0].clone();
        twin.id = "rumtek-annex".to_string();
        dataset.monasteries.push(twin);

        let catalog = Catalog::new(dataset).unwrap();
        assert_eq!(
            catalog.monastery_by_name("Rumtek Monastery").unwrap().id,
            "rumtek-annex"
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Dataset::default()).unwrap();
        assert!(catalog.is_empty());
    }

    // ============================================================
    // LOADER TESTS
    // ============================================================

    #[test]
    fn test_source_selection() {
        assert_eq!(CatalogSource::from_args(None, None), CatalogSource::Embedded);
        assert_eq!(
            CatalogSource::from_args(Some(PathBuf::from("a.json")), None),
            CatalogSource::File(PathBuf::from("a.json"))
        );
        assert_eq!(
            CatalogSource::from_args(None, Some("http://host/c.json".to_string())),
            CatalogSource::Url("http://host/c.json".to_string())
        );
    }

    #[tokio::test]
    async fn test_embedded_catalog_is_valid() {
        let catalog = load_catalog(&CatalogSource::Embedded).await.unwrap();

        assert!(!catalog.monasteries().is_empty());
        assert!(!catalog.archives().is_empty());
        assert!(catalog.monastery("rumtek").is_some());

        // Every archive points at a known monastery
        for archive in catalog.archives() {
            assert!(
                catalog.monastery_by_name(&archive.monastery_name).is_some(),
                "archive {} links to unknown monastery {}",
                archive.title,
                archive.monastery_name
            );
        }
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = load_catalog(&CatalogSource::File(file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(catalog.monasteries().len(), 2);
        assert_eq!(catalog.archives().len(), 1);
    }

    #[tokio::test]
    async fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_catalog(&CatalogSource::File(path)).await.err().unwrap();
        assert!(err.to_string().contains("missing.json"));
    }

    #[tokio::test]
    async fn test_load_from_url() {
        let app = Router::new().route("/catalog.json", get(|| async { SAMPLE }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let url = format!("http://{}/catalog.json", addr);
        let catalog = load_catalog(&CatalogSource::Url(url)).await.unwrap();

        assert_eq!(catalog.monasteries().len(), 2);
        assert!(catalog.monastery("dubdi").is_some());
    }

    #[tokio::test]
    async fn test_load_from_url_error_status_fails() {
        let app = Router::new().route(
            "/catalog.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let url = format!("http://{}/catalog.json", addr);
        assert!(load_catalog(&CatalogSource::Url(url)).await.is_err());
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_list_monasteries_in_catalog_order() {
        let response = handle_list_monasteries(Extension(sample_catalog())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json[0]["id"], "rumtek");
        assert_eq!(json[1]["id"], "dubdi");
    }

    #[tokio::test]
    async fn test_get_monastery_found() {
        let response =
            handle_get_monastery(Path("dubdi".to_string()), Extension(sample_catalog())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["name"], "Dubdi Monastery");
        assert_eq!(json["district"], "West Sikkim");
    }

    #[tokio::test]
    async fn test_get_monastery_not_found() {
        let response =
            handle_get_monastery(Path("ghost".to_string()), Extension(sample_catalog())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("ghost"));
    }

    #[tokio::test]
    async fn test_list_archives() {
        let archives = handle_list_archives(Extension(sample_catalog())).await.0;
        assert_eq!(archives.len(), 1);
        assert_eq!(archives[0].title, "Karmapa Thangkas");
    }

    #[tokio::test]
    async fn test_health_reports_counts() {
        let health = handle_health(Extension(sample_catalog())).await.0;
        assert_eq!(health.status, "ok");
        assert_eq!(health.monasteries, 2);
        assert_eq!(health.archives, 1);
    }
}
