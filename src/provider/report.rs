use super::get_text;
use crate::config::{ReportConfig, RetryConfig};
use crate::error::FetchError;
use reqwest::Client;
use tracing::debug;

/// Acquires the raw tabular report. Unlike the metric fetcher this one is
/// allowed to fail: the pipeline substitutes the curated dataset.
pub struct ReportFetcher {
    client: Client,
    cfg: ReportConfig,
    retry: RetryConfig,
}

impl ReportFetcher {
    pub fn new(client: Client, cfg: ReportConfig, retry: RetryConfig) -> Self {
        Self { client, cfg, retry }
    }

    pub async fn fetch_text(&self) -> Result<String, FetchError> {
        let text = get_text(&self.client, &self.cfg.url, &self.retry).await?;
        debug!("Report fetched: {} bytes", text.len());
        Ok(text)
    }
}
