use crate::core::CodecError;
use crate::models::{ResultsEnvelope, GENERIC_PROCESSING_ERROR};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the matching or search endpoints
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// 2xx response without a `results` array; carries the server's message or a generic one
    #[error("{0}")]
    Malformed(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Turn an endpoint response into its `results` list
///
/// The status is checked first and the body is never read for non-2xx
/// responses.
pub async fn read_results<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Vec<T>, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Http { status: status.as_u16() });
    }

    let body = response.bytes().await?;
    let value: Value = serde_json::from_slice(&body)?;

    normalize_results(value)
}

/// Apply the `results` / `error` / generic fallback ladder to a decoded body
pub fn normalize_results<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ClientError> {
    let mut envelope = ResultsEnvelope::from_value(value);

    match envelope.results.take() {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(ClientError::Decode),
        _ => {
            let message = envelope
                .error_message()
                .unwrap_or_else(|| GENERIC_PROCESSING_ERROR.to_string());
            Err(ClientError::Malformed(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Issue, IssueCard};
    use serde_json::json;

    #[test]
    fn test_results_array() {
        let cards: Vec<IssueCard> =
            normalize_results(json!({"results": [{"title": "Fix it", "match": 90}]})).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].match_score, 90.0);
    }

    #[test]
    fn test_fractional_match_score() {
        let cards: Vec<IssueCard> =
            normalize_results(json!({"results": [{"title": "t", "match": 87.5}]})).unwrap();
        assert_eq!(cards[0].match_score, 87.5);
    }

    #[test]
    fn test_null_fields_keep_whole_list() {
        let issues: Vec<Issue> = normalize_results(json!({"results": [
            {"repo_full_name": "acme/a", "issue_number": 1, "issue_title": "Full",
             "labels": ["bug"], "languages": ["Rust"], "repo_stars": 10},
            {"repo_full_name": "acme/b", "issue_number": 2, "issue_title": "Sparse",
             "labels": null, "languages": null, "repo_topics": null, "repo_stars": null,
             "repo_watchers": null, "repo_description": null, "issue_html_url": null}
        ]}))
        .unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].labels, vec!["bug"]);
        assert_eq!(issues[1].issue_title, "Sparse");
        assert!(issues[1].labels.is_empty());
        assert_eq!(issues[1].repo_stars, 0);
    }

    #[test]
    fn test_error_field_wins_over_generic() {
        let err = normalize_results::<IssueCard>(json!({"error": "quota exceeded"})).unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn test_results_not_array() {
        let err = normalize_results::<IssueCard>(json!({"results": {"title": "x"}})).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_PROCESSING_ERROR);
    }

    #[test]
    fn test_neither_shape() {
        let err = normalize_results::<IssueCard>(json!({"request_process_time": 0.2})).unwrap_err();
        assert!(matches!(err, ClientError::Malformed(ref m) if m == GENERIC_PROCESSING_ERROR));
    }

    #[test]
    fn test_http_error_message() {
        let err = ClientError::Http { status: 500 };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }
}
