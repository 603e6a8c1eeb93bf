//! reqwest-backed feedback source

use reqwest::Url;

use super::source::{parse_entries, FeedbackSource, FetchError, SourceConfig};
use crate::domain::FeedbackEntry;

/// Fetches the feedback list with a single GET
pub struct HttpFeedbackSource {
    http: reqwest::Client,
    url: Url,
}

impl HttpFeedbackSource {
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let url = config.url()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, url })
    }
}

#[async_trait::async_trait]
impl FeedbackSource for HttpFeedbackSource {
    async fn fetch_all(&self) -> Result<Vec<FeedbackEntry>, FetchError> {
        let response = self
            .http
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.bytes().await?;
        parse_entries(&body)
    }

    fn endpoint_name(&self) -> String {
        self.url.to_string()
    }
}
