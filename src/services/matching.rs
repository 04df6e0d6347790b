use crate::core::codec;
use crate::models::{IssueCard, Profile};
use crate::services::envelope::{read_results, ClientError};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Client for the issue matching endpoint
///
/// Sends one encoded profile per call and returns the ranked cards exactly as
/// the service ordered them. No retries are attempted.
#[derive(Debug, Clone)]
pub struct MatchingClient {
    endpoint: String,
    client: Client,
}

impl MatchingClient {
    /// Create a new matching client; `timeout` of `None` keeps the transport default
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(endpoint, builder.build()?))
    }

    /// Create a matching client around an existing HTTP client
    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Encode the profile and submit it for matching
    pub async fn submit_profile(&self, profile: &Profile) -> Result<Vec<IssueCard>, ClientError> {
        let payload = codec::encode(profile).await?;
        let body = payload.to_json()?;

        tracing::info!(
            "Submitting profile to {} ({} interests, {} urls, resume: {})",
            self.endpoint,
            payload.interests.len(),
            payload.urls.as_ref().map_or(0, Vec::len),
            payload.resume.is_some()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let cards = read_results(response).await.inspect_err(|e| {
            tracing::warn!("Matching request failed: {}", e);
        })?;

        tracing::info!("Received {} matched issues", cards.len());

        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_client_creation() {
        let client = MatchingClient::new("https://match.test/api", None).unwrap();
        assert_eq!(client.endpoint(), "https://match.test/api");
    }
}
