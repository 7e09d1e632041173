use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub metric: MetricConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub retry: RetryConfig,

    /// Entries shown on each side of the inserted protocol.
    #[serde(default = "default_window_half_width")]
    pub window_half_width: u32,
}

/// Scalar-metric provider: structured API first, scraped page second,
/// static constant last.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct MetricConfig {
    /// Display name for the inserted entry.
    #[serde(default = "default_metric_label")]
    pub label: String,

    #[serde(default = "default_metric_api_url")]
    pub api_url: String,

    /// JSON field holding the metric, in billions of USD.
    #[serde(default = "default_metric_api_field")]
    pub api_field: String,

    /// Human-facing page scraped when the API strategy fails.
    #[serde(default = "default_metric_page_url")]
    pub page_url: String,

    /// Static fallback, in millions of USD.
    #[serde(default = "default_metric_fallback_millions")]
    pub fallback_millions: u64,

    /// Scraped candidates outside this band (in billions) are rejected.
    /// Wide on purpose: a narrow band silently pins the metric to the
    /// fallback once the protocol outgrows it.
    #[serde(default = "default_plausible_min_billions")]
    pub plausible_min_billions: f64,

    #[serde(default = "default_plausible_max_billions")]
    pub plausible_max_billions: f64,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            label: default_metric_label(),
            api_url: default_metric_api_url(),
            api_field: default_metric_api_field(),
            page_url: default_metric_page_url(),
            fallback_millions: default_metric_fallback_millions(),
            plausible_min_billions: default_plausible_min_billions(),
            plausible_max_billions: default_plausible_max_billions(),
        }
    }
}

/// Tabular report provider and the heuristics used to parse it.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ReportConfig {
    #[serde(default = "default_report_url")]
    pub url: String,

    /// Lines shorter than this are treated as noise by the primary rule.
    #[serde(default = "default_min_line_len")]
    pub min_line_len: usize,

    /// Line length required before the relaxed rule will consider a row.
    #[serde(default = "default_relaxed_min_line_len")]
    pub relaxed_min_line_len: usize,

    /// Rows below this asset size (millions) are discarded as noise.
    #[serde(default = "default_min_assets_millions")]
    pub min_assets_millions: u64,

    /// Extracted names shorter than this are treated as false positives.
    #[serde(default = "default_min_name_len")]
    pub min_name_len: usize,

    /// Fixed-width prefix taken as the name by the relaxed rule.
    #[serde(default = "default_name_prefix_width")]
    pub name_prefix_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            url: default_report_url(),
            min_line_len: default_min_line_len(),
            relaxed_min_line_len: default_relaxed_min_line_len(),
            min_assets_millions: default_min_assets_millions(),
            min_name_len: default_min_name_len(),
            name_prefix_width: default_name_prefix_width(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,

    /// Both providers reject requests without a browser-style agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_sec: default_timeout_sec(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
        }
    }
}
