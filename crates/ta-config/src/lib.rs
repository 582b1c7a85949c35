//! Configuration management.

mod settings;

pub use settings::{AnalysisSettings, AppConfig, AppSettings, DataSettings, LoggingConfig, ReportSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use tracing::warn;

/// Load configuration from file and environment.
///
/// Environment variables prefixed with `ANALYSIS__` override file values,
/// e.g. `ANALYSIS__ANALYSIS__OVERBOUGHT=80`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    build(path, true)
}

/// Like [`load_config`], but a missing file yields the defaults layered
/// with the environment.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        warn!(path = %path.display(), "Config file not found, using defaults");
    }
    build(path, false)
}

fn build(path: &Path, required: bool) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix("ANALYSIS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app: AppConfig = config.try_deserialize()?;
    app.validate()
        .map_err(|e| ConfigError::Message(e.to_string()))?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("analysis.toml");
        fs::write(
            &path,
            r#"
[app]
name = "nse-analysis"

[analysis]
overbought = 80.0
oversold = 20.0
default_period = "6mo"

[report]
currency = "$"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.app.name, "nse-analysis");
        assert_eq!(config.analysis.overbought, 80.0);
        assert_eq!(config.analysis.default_period, ta_core::Period::SixMonths);
        assert_eq!(config.report.currency, "$");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/analysis.toml");
        assert!(load_config(path).is_err());

        let config = load_config_or_default(path).unwrap();
        assert_eq!(config.analysis.overbought, 70.0);
        assert_eq!(config.report.currency, "₹");
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[analysis]\noverbought = 20.0\noversold = 40.0\n").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("env.toml");
        fs::write(&path, "[data]\npath = \"from-file\"\n").unwrap();

        std::env::set_var("ANALYSIS__DATA__PATH", "from-env");
        let config = load_config(&path);
        std::env::remove_var("ANALYSIS__DATA__PATH");

        assert_eq!(config.unwrap().data.path, "from-env");
    }
}
