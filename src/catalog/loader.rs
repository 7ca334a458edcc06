use super::store::Catalog;
use super::types::Dataset;
use crate::config::{
    CATALOG_FETCH_ATTEMPTS, CATALOG_FETCH_TIMEOUT, CATALOG_RETRY_BASE_MS, CATALOG_RETRY_MAX_MS,
};

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Seed dataset compiled into the binary, used when no source is configured.
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    pub fn from_args(path: Option<PathBuf>, url: Option<String>) -> Self {
        match (path, url) {
            (Some(path), _) => CatalogSource::File(path),
            (None, Some(url)) => CatalogSource::Url(url),
            (None, None) => CatalogSource::Embedded,
        }
    }
}

pub async fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    let raw = match source {
        CatalogSource::Embedded => EMBEDDED_CATALOG.to_string(),
        CatalogSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?,
        CatalogSource::Url(url) => {
            let client = reqwest::Client::new();
            fetch_with_retry(&client, url, CATALOG_FETCH_TIMEOUT, CATALOG_FETCH_ATTEMPTS)
                .await
                .with_context(|| format!("Failed to fetch catalog from {}", url))?
        }
    };

    let dataset =
        parse_dataset(&raw).with_context(|| format!("Invalid catalog from {:?}", source))?;
    let catalog = Catalog::new(dataset)?;

    tracing::info!(
        "Loaded catalog: {} monasteries, {} archives",
        catalog.monasteries().len(),
        catalog.archives().len()
    );

    Ok(catalog)
}

pub fn parse_dataset(raw: &str) -> Result<Dataset> {
    let dataset = serde_json::from_str(raw)?;
    Ok(dataset)
}

async fn fetch_with_retry(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
    attempts: usize,
) -> Result<String> {
    let mut delay_ms = CATALOG_RETRY_BASE_MS;

    for attempt in 0..attempts {
        let response = client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .and_then(|resp| resp.error_for_status());

        let error = match response {
            Ok(resp) => match resp.text().await {
                Ok(text) => return Ok(text),
                Err(e) => e,
            },
            Err(e) => e,
        };

        if attempt + 1 == attempts {
            return Err(anyhow::anyhow!(error));
        }

        tracing::warn!(
            "Catalog fetch attempt {}/{} failed: {}",
            attempt + 1,
            attempts,
            error
        );
        let jitter = rand::random::<u64>() % 50;
        tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
        delay_ms = (delay_ms * 2).min(CATALOG_RETRY_MAX_MS);
    }

    Err(anyhow::anyhow!("Retry attempts exhausted"))
}
