use super::{get_json, get_text};
use crate::config::{MetricConfig, RetryConfig};
use crate::error::FetchError;
use regex::Regex;
use reqwest::Client;
use serde::Serialize;
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// Where a metric reading came from. `Fallback` readings are valid but
/// degraded; tests and callers can tell them apart from sourced ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Api,
    Scraped,
    Fallback,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricReading {
    /// Millions of USD (the shared unit).
    pub millions: u64,
    pub provenance: Provenance,
}

/// Last-known-good metric value. Empty at process start, written only on a
/// confirmed successful fetch, read only as a fallback seed. Advisory:
/// correctness never depends on it.
#[derive(Debug, Default)]
pub struct MetricCache(Mutex<Option<u64>>);

impl MetricCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_good(&self) -> Option<u64> {
        // A poisoned lock still holds a usable value
        *self.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn store(&self, millions: u64) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = Some(millions);
    }
}

/// Acquires the scalar metric. Three strategies, cruder each step:
/// structured API, scraped page, static fallback. `fetch` never fails.
pub struct MetricFetcher {
    client: Client,
    cfg: MetricConfig,
    retry: RetryConfig,
}

impl MetricFetcher {
    pub fn new(client: Client, cfg: MetricConfig, retry: RetryConfig) -> Self {
        Self { client, cfg, retry }
    }

    /// Always returns a usable positive value in millions. Network and parse
    /// errors are absorbed here; the caller only sees the provenance tag.
    pub async fn fetch(&self, cache: &MetricCache) -> MetricReading {
        match self.fetch_structured().await {
            Ok(millions) => {
                info!("Metric from API: {}M", millions);
                cache.store(millions);
                return MetricReading {
                    millions,
                    provenance: Provenance::Api,
                };
            }
            Err(e) => debug!("API strategy failed: {}", e),
        }

        match self.fetch_scraped().await {
            Ok(millions) => {
                info!("Metric scraped from page: {}M", millions);
                cache.store(millions);
                return MetricReading {
                    millions,
                    provenance: Provenance::Scraped,
                };
            }
            Err(e) => warn!("Scrape strategy failed: {}", e),
        }

        let millions = cache.last_good().unwrap_or(self.cfg.fallback_millions);
        warn!("Both metric strategies failed, using fallback: {}M", millions);
        MetricReading {
            millions,
            provenance: Provenance::Fallback,
        }
    }

    /// Strategy 1: metrics API, JSON field in billions.
    async fn fetch_structured(&self) -> Result<u64, FetchError> {
        let body = get_json(&self.client, &self.cfg.api_url, &self.retry).await?;
        read_billions_field(&body, &self.cfg.api_field).map(to_millions)
    }

    /// Strategy 2: scrape the human-facing page with ordered pattern rules.
    async fn fetch_scraped(&self) -> Result<u64, FetchError> {
        let text = get_text(&self.client, &self.cfg.page_url, &self.retry).await?;
        extract_billions(
            &text,
            &self.cfg.api_field,
            self.cfg.plausible_min_billions,
            self.cfg.plausible_max_billions,
        )
        .map(to_millions)
        .ok_or(FetchError::NoPlausibleCandidate)
    }
}

fn to_millions(billions: f64) -> u64 {
    (billions * 1000.0).round() as u64
}

/// Pull the billions figure out of the API response. The field may arrive
/// as a number or a numeric string. Zero, negative, and non-finite values
/// count as unusable so the cruder strategies run instead — a degraded
/// reading must never enter the last-known-good cache.
fn read_billions_field(body: &serde_json::Value, field: &str) -> Result<f64, FetchError> {
    let raw = &body[field];
    let billions = raw
        .as_f64()
        .or_else(|| raw.as_str().and_then(|s| s.parse().ok()))
        .ok_or_else(|| FetchError::MissingField(field.to_string()))?;

    if !billions.is_finite() || billions <= 0.0 {
        return Err(FetchError::UnusableValue {
            field: field.to_string(),
            value: billions,
        });
    }

    Ok(billions)
}

/// Ordered extraction rules against the raw page text. Each rule yields a
/// candidate in billions; the first one inside the plausibility band wins.
/// The band is configuration, never a constant: a value outside it is more
/// likely a parsing artifact than a real reading.
fn extract_billions(text: &str, field: &str, min_billions: f64, max_billions: f64) -> Option<f64> {
    // "net_deposits" should also match "net deposits" / "net-deposits"
    let term = regex::escape(field).replace('_', r"[_\s-]?");

    let patterns = [
        // "net deposits: $68.3B"
        format!(r"(?i){term}[^:]*:\s*\$?(\d+\.?\d*)\s*b"),
        // "68.3B ... net deposits"
        format!(r"(?i)(\d+\.?\d*)\s*b.{{0,80}}{term}"),
        // embedded JSON: "net_deposits"...{"value": 68.3}
        format!(r#"(?i)"{}"[^}}]*"value"[^:]*:\s*(\d+\.?\d*)"#, regex::escape(field)),
    ];

    for pattern in &patterns {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };

        for caps in re.captures_iter(text) {
            let Some(value) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) else {
                continue;
            };

            if value > min_billions && value < max_billions {
                debug!("Pattern '{}' matched: {}B", pattern, value);
                return Some(value);
            }

            debug!("Rejecting implausible candidate: {}B", value);
        }
    }

    None
}
