use crate::error::{Result, WardtraceError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for wardtrace
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Directory holding the persisted slots
    pub data_dir: ConfigValue<PathBuf>,
    /// Pixel radius for selecting an existing outline point
    pub select_threshold_px: ConfigValue<f64>,
    /// Pixel radius around the first point that closes the outline
    pub close_threshold_px: ConfigValue<f64>,
    /// Window within which two clicks on the same point count as one double click
    pub double_click_ms: ConfigValue<u64>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            data_dir: ConfigValue::new(PathBuf::from(".wardtrace"), ConfigSource::Default),
            select_threshold_px: ConfigValue::new(10.0, ConfigSource::Default),
            close_threshold_px: ConfigValue::new(40.0, ConfigSource::Default),
            double_click_ms: ConfigValue::new(300, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| WardtraceError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| WardtraceError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        // Update values from file
        if let Some(data_dir) = file_config.data_dir {
            self.data_dir.update(data_dir, ConfigSource::File);
        }

        if let Some(px) = file_config.select_threshold_px {
            self.select_threshold_px.update(px, ConfigSource::File);
        }

        if let Some(px) = file_config.close_threshold_px {
            self.close_threshold_px.update(px, ConfigSource::File);
        }

        if let Some(ms) = file_config.double_click_ms {
            self.double_click_ms.update(ms, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // WARDTRACE_DATA_DIR
        if let Ok(dir) = env::var("WARDTRACE_DATA_DIR") {
            self.data_dir.update(PathBuf::from(dir), ConfigSource::Environment);
        }

        // WARDTRACE_SELECT_THRESHOLD_PX
        if let Ok(px_str) = env::var("WARDTRACE_SELECT_THRESHOLD_PX") {
            match px_str.parse::<f64>() {
                Ok(px) => self.select_threshold_px.update(px, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid WARDTRACE_SELECT_THRESHOLD_PX value '{}': expected pixels",
                    px_str
                ),
            }
        }

        // WARDTRACE_CLOSE_THRESHOLD_PX
        if let Ok(px_str) = env::var("WARDTRACE_CLOSE_THRESHOLD_PX") {
            match px_str.parse::<f64>() {
                Ok(px) => self.close_threshold_px.update(px, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid WARDTRACE_CLOSE_THRESHOLD_PX value '{}': expected pixels",
                    px_str
                ),
            }
        }

        // WARDTRACE_DOUBLE_CLICK_MS
        if let Ok(ms_str) = env::var("WARDTRACE_DOUBLE_CLICK_MS") {
            match ms_str.parse::<u64>() {
                Ok(ms) => self.double_click_ms.update(ms, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid WARDTRACE_DOUBLE_CLICK_MS value '{}': expected milliseconds",
                    ms_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(data_dir) = overrides.data_dir {
            self.data_dir.update(data_dir, ConfigSource::Cli);
        }

        if let Some(px) = overrides.select_threshold_px {
            self.select_threshold_px.update(px, ConfigSource::Cli);
        }

        if let Some(px) = overrides.close_threshold_px {
            self.close_threshold_px.update(px, ConfigSource::Cli);
        }

        if let Some(ms) = overrides.double_click_ms {
            self.double_click_ms.update(ms, ConfigSource::Cli);
        }
    }

    /// Reject threshold combinations the outline editor cannot work with.
    /// The closing radius must stay strictly larger than the selection
    /// radius, otherwise closing near the first point becomes unreachable.
    pub fn validate(&self) -> Result<()> {
        if self.select_threshold_px.value <= 0.0 {
            return Err(WardtraceError::ConfigInvalid {
                key: "select_threshold_px".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        if self.close_threshold_px.value <= self.select_threshold_px.value {
            return Err(WardtraceError::ConfigInvalid {
                key: "close_threshold_px".to_string(),
                reason: format!(
                    "must be strictly larger than select_threshold_px ({})",
                    self.select_threshold_px.value
                ),
            });
        }

        Ok(())
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "data_dir".to_string(),
            (self.data_dir.value.display().to_string(), self.data_dir.source),
        );

        map.insert(
            "select_threshold_px".to_string(),
            (format!("{}", self.select_threshold_px.value), self.select_threshold_px.source),
        );

        map.insert(
            "close_threshold_px".to_string(),
            (format!("{}", self.close_threshold_px.value), self.close_threshold_px.source),
        );

        map.insert(
            "double_click_ms".to_string(),
            (format!("{}", self.double_click_ms.value), self.double_click_ms.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    select_threshold_px: Option<f64>,
    close_threshold_px: Option<f64>,
    double_click_ms: Option<u64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub select_threshold_px: Option<f64>,
    pub close_threshold_px: Option<f64>,
    pub double_click_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.data_dir.value, PathBuf::from(".wardtrace"));
        assert_eq!(config.data_dir.source, ConfigSource::Default);
        assert_eq!(config.select_threshold_px.value, 10.0);
        assert_eq!(config.close_threshold_px.value, 40.0);
        assert_eq!(config.double_click_ms.value, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400); // Still CLI value
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
data_dir = "/var/lib/wardtrace"
select_threshold_px = 8.0
close_threshold_px = 32.0
double_click_ms = 250
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.data_dir.value, PathBuf::from("/var/lib/wardtrace"));
        assert_eq!(config.data_dir.source, ConfigSource::File);
        assert_eq!(config.select_threshold_px.value, 8.0);
        assert_eq!(config.close_threshold_px.value, 32.0);
        assert_eq!(config.double_click_ms.value, 250);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            data_dir: Some(PathBuf::from("/tmp/wt")),
            select_threshold_px: Some(12.0),
            close_threshold_px: None,
            double_click_ms: None,
        };

        config.update_from_cli(overrides);

        assert_eq!(config.data_dir.value, PathBuf::from("/tmp/wt"));
        assert_eq!(config.data_dir.source, ConfigSource::Cli);
        assert_eq!(config.select_threshold_px.value, 12.0);
        assert_eq!(config.select_threshold_px.source, ConfigSource::Cli);
        // These should still be defaults
        assert_eq!(config.close_threshold_px.source, ConfigSource::Default);
        assert_eq!(config.double_click_ms.source, ConfigSource::Default);
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let mut config = LayeredConfig::with_defaults();
        config.close_threshold_px.update(10.0, ConfigSource::Cli);

        let err = config.validate().unwrap_err();
        assert!(matches!(err, WardtraceError::ConfigInvalid { ref key, .. } if key == "close_threshold_px"));
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("data_dir"));
        assert!(map.contains_key("select_threshold_px"));
        assert!(map.contains_key("close_threshold_px"));
        assert!(map.contains_key("double_click_ms"));

        let (close_value, close_source) = &map["close_threshold_px"];
        assert_eq!(close_value, "40");
        assert_eq!(*close_source, ConfigSource::Default);
    }
}
