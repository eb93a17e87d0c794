//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{EngineError, Result};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with APP_, e.g. `APP_ENGINE__TICK_SIZE`)
/// 2. Configuration file (TOML format)
/// 3. Default values
///
/// The engine and settings sections are validated before returning.
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true),
    );

    let config: AppConfig = builder
        .build()
        .map_err(|e| EngineError::Configuration(e.to_string()))?
        .try_deserialize()
        .map_err(|e| EngineError::Configuration(e.to_string()))?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Some("/nonexistent/pairs_spread.toml")).unwrap();
        assert_eq!(config.engine.entry_threshold_ticks, 6);
        assert_eq!(config.settings.log_level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_toml(
            r#"
[engine]
tick_size = "0.5"
entry_threshold_ticks = 8
exit_threshold_ticks = 2

[engine.leg_a]
symbol = "MNQ"
quantity = 10

[engine.leg_b]
symbol = "NQ"
quantity = 1

[settings]
log_level = "debug"
"#,
        );

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.engine.tick_size, dec!(0.5));
        assert_eq!(config.engine.entry_threshold_ticks, 8);
        assert_eq!(config.engine.leg_a.symbol, "MNQ");
        assert_eq!(config.engine.leg_b.symbol, "NQ");
        assert_eq!(config.settings.log_level, "debug");
        assert!(!config.settings.json_logs);
    }

    #[test]
    fn test_invalid_engine_section_is_rejected() {
        let file = write_toml(
            r#"
[engine]
entry_threshold_ticks = 1
exit_threshold_ticks = 3
"#,
        );

        let result = load_config(file.path().to_str());
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_channel_size_is_rejected() {
        let file = write_toml(
            r#"
[settings]
channel_size = 0
"#,
        );

        let err = load_config(file.path().to_str()).unwrap_err();
        assert!(err.to_string().contains("channel size"));
    }
}
