use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Plausibility range is inverted: min {min}B >= max {max}B")]
    InvertedPlausibilityRange { min: f64, max: f64 },

    #[error("Fallback metric value must be positive")]
    ZeroFallback,
}

/// Errors raised by the outbound HTTP strategies. These never escape the
/// pipeline: every fetch degrades to a fallback value instead.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    Status(u16),

    #[error("Response JSON has no usable '{0}' field")]
    MissingField(String),

    #[error("Field '{field}' holds an unusable value: {value}")]
    UnusableValue { field: String, value: f64 },

    #[error("No extraction pattern produced a plausible value")]
    NoPlausibleCandidate,
}
