//! Feedback source abstraction and its failure type

use std::time::Duration;

use reqwest::Url;

use crate::domain::FeedbackEntry;

/// Backend route serving every stored feedback row
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/feedback/all";

/// Failure of a whole fetch. The entry list is all-or-nothing.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    #[error("response is not a feedback list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where and how to fetch feedback
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub endpoint: String,
    /// Forwarded as `team_id` query parameter
    pub team_id: Option<String>,
    /// Forwarded as `user_id` query parameter
    pub user_id: Option<String>,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            team_id: None,
            user_id: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl SourceConfig {
    /// Full request URL including backend filters
    pub fn url(&self) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(self.endpoint.trim()).map_err(|err| FetchError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: err.to_string(),
            })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let filters = [("team_id", &self.team_id), ("user_id", &self.user_id)];
        if filters.iter().any(|(_, value)| has_value(value)) {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in filters {
                if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                    pairs.append_pair(key, value);
                }
            }
        }
        Ok(url)
    }

    /// Display string for the header
    pub fn display(&self) -> String {
        self.url()
            .map(|url| url.to_string())
            .unwrap_or_else(|_| self.endpoint.clone())
    }
}

fn has_value(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Decode a response body into feedback entries
pub fn parse_entries(body: &[u8]) -> Result<Vec<FeedbackEntry>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

/// Anything that can produce the full list of feedback entries
#[async_trait::async_trait]
pub trait FeedbackSource: Send + Sync + 'static {
    /// Fetch every entry in one request
    async fn fetch_all(&self) -> Result<Vec<FeedbackEntry>, FetchError>;

    /// Get endpoint display name
    fn endpoint_name(&self) -> String;
}
