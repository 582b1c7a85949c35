//! Configuration structures.

use serde::{Deserialize, Serialize};
use ta_core::error::SignalError;
use ta_core::types::Period;
use ta_signals::SignalClassifier;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub data: DataSettings,
}

impl AppConfig {
    /// Check values that deserialize fine but make no sense together.
    pub fn validate(&self) -> Result<(), SignalError> {
        self.analysis.classifier().validate()
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stock-analysis".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// Directory for daily-rotated log files
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}

/// Signal classification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// RSI above this is overbought
    pub overbought: f64,
    /// RSI below this is oversold
    pub oversold: f64,
    /// Period used when none is given on the command line
    pub default_period: Period,
}

impl AnalysisSettings {
    /// Classifier using these thresholds.
    pub fn classifier(&self) -> SignalClassifier {
        SignalClassifier {
            overbought: self.overbought,
            oversold: self.oversold,
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        let classifier = SignalClassifier::default();
        Self {
            overbought: classifier.overbought,
            oversold: classifier.oversold,
            default_period: Period::default(),
        }
    }
}

/// Report presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Symbol prefixed to prices
    pub currency: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            currency: "₹".to_string(),
        }
    }
}

/// Price data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// CSV file or directory of per-symbol CSV files
    pub path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: "data".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.classifier(), SignalClassifier::default());
    }

    #[test]
    fn test_to_toml() {
        let text = AppConfig::default().to_toml().unwrap();
        assert!(text.contains("[analysis]"));
        assert!(text.contains("default_period = \"1y\""));
    }
}
