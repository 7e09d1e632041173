mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            metric: MetricConfig::default(),
            report: ReportConfig::default(),
            http: HttpConfig::default(),
            retry: RetryConfig::default(),
            window_half_width: default_window_half_width(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from a YAML file if present, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metric.plausible_min_billions >= self.metric.plausible_max_billions {
            return Err(ConfigError::InvertedPlausibilityRange {
                min: self.metric.plausible_min_billions,
                max: self.metric.plausible_max_billions,
            });
        }

        if self.metric.fallback_millions == 0 {
            return Err(ConfigError::ZeroFallback);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_plausibility_range_rejected() {
        let mut config = Config::default();
        config.metric.plausible_min_billions = 100.0;
        config.metric.plausible_max_billions = 50.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedPlausibilityRange { .. })
        ));
    }

    #[test]
    fn test_zero_fallback_rejected() {
        let mut config = Config::default();
        config.metric.fallback_millions = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroFallback)));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
metric:
  label: LIDO
  fallback_millions: 25000
report:
  min_assets_millions: 5000
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.metric.label, "LIDO");
        assert_eq!(config.metric.fallback_millions, 25_000);
        assert_eq!(config.report.min_assets_millions, 5_000);
        // Untouched sections keep their defaults
        assert_eq!(config.window_half_width, 5);
        assert_eq!(config.report.min_line_len, 50);
    }
}
