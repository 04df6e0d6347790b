use crate::models::Issue;
use crate::services::envelope::{normalize_results, read_results, ClientError};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors loading a static catalogue seed
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read catalogue seed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalogue seed: {0}")]
    Invalid(#[from] ClientError),
}

/// Client for the issue search endpoint
#[derive(Debug, Clone)]
pub struct SearchClient {
    endpoint: String,
    client: Client,
}

impl SearchClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(endpoint, builder.build()?))
    }

    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the browsable issue catalogue
    pub async fn fetch_catalogue(&self) -> Result<Vec<Issue>, ClientError> {
        tracing::debug!("Fetching issue catalogue from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let issues = read_results(response).await.inspect_err(|e| {
            tracing::warn!("Catalogue request failed: {}", e);
        })?;

        tracing::info!("Fetched {} catalogue issues", issues.len());

        Ok(issues)
    }
}

/// Where the search view gets its catalogue from
///
/// Picked once at startup; a static seed never falls back to the live endpoint
/// or the other way round.
#[derive(Debug, Clone)]
pub enum CatalogueSource {
    Live(SearchClient),
    Static(Vec<Issue>),
}

impl CatalogueSource {
    /// Load a static catalogue from a `{"results": [...]}` JSON document
    pub async fn from_seed_file(path: &Path) -> Result<Self, SourceError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SourceError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_seed_json(&text)
    }

    pub fn from_seed_json(text: &str) -> Result<Self, SourceError> {
        let value: Value = serde_json::from_str(text).map_err(ClientError::from)?;
        let issues = normalize_results(value)?;
        Ok(Self::Static(issues))
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    pub async fn fetch(&self) -> Result<Vec<Issue>, ClientError> {
        match self {
            Self::Live(client) => client.fetch_catalogue().await,
            Self::Static(issues) => Ok(issues.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_json_loads() {
        let source = CatalogueSource::from_seed_json(
            r#"{"results": [{"issue_title": "Add docs", "labels": ["docs"], "languages": ["Rust"]}]}"#,
        )
        .unwrap();

        assert!(!source.is_live());
        let issues = tokio_test::block_on(source.fetch()).unwrap();
        assert_eq!(issues[0].issue_title, "Add docs");
    }

    #[test]
    fn test_seed_without_results_rejected() {
        let err = CatalogueSource::from_seed_json(r#"{"error": "stale seed"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid catalogue seed: stale seed");
    }
}
