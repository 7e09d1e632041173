mod metric;
mod report;
mod retry;

pub use metric::{MetricCache, MetricFetcher, MetricReading, Provenance};
pub use report::ReportFetcher;

use crate::config::{HttpConfig, RetryConfig};
use crate::error::FetchError;
use reqwest::Client;
use retry::retry_with_backoff;
use std::time::Duration;

/// Shared HTTP client: bounded timeout so a slow provider cannot stall a
/// request, browser-style User-Agent because both providers reject the
/// default one.
pub fn build_client(http: &HttpConfig) -> Result<Client, FetchError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(http.timeout_sec))
        .user_agent(&http.user_agent)
        .build()?)
}

/// GET a URL as text, retrying with backoff. Non-2xx counts as failure.
pub(crate) async fn get_text(
    client: &Client,
    url: &str,
    retry: &RetryConfig,
) -> Result<String, FetchError> {
    retry_with_backoff(retry, || async {
        let resp = client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(resp.text().await?)
    })
    .await
}

/// GET a URL as JSON, retrying with backoff.
pub(crate) async fn get_json(
    client: &Client,
    url: &str,
    retry: &RetryConfig,
) -> Result<serde_json::Value, FetchError> {
    retry_with_backoff(retry, || async {
        let resp = client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(resp.json::<serde_json::Value>().await?)
    })
    .await
}
