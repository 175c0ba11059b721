//! Resolve the layered configuration for a CLI run.
//!
//! Precedence is Default < config file < environment < CLI flags. The data
//! directory is discovered by walking up from the current directory, the
//! same way the dashboard build resolves its installation.

use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

use wardtrace_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use wardtrace_editor::EditorThresholds;

use crate::errors;

/// Directory name holding the slots and config file
pub const DATA_DIR_NAME: &str = ".wardtrace";

/// Find the nearest data directory, walking up from the current directory
pub fn find_data_dir() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;
    loop {
        let candidate = current.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolve the full layered configuration, requiring a data directory from
/// either discovery or the `--data-dir` flag
pub fn resolve_config(data_dir_override: Option<PathBuf>) -> Result<LayeredConfig> {
    let data_dir = match data_dir_override.clone().or_else(find_data_dir) {
        Some(dir) => dir,
        None => return Err(errors::data_dir_not_found().into()),
    };

    let mut config = LayeredConfig::with_defaults();

    let config_file = data_dir.join("config.toml");
    if config_file.exists() {
        config = config.load_from_file(&config_file)?;
    }
    config.data_dir.update(data_dir, ConfigSource::File);

    config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        data_dir: data_dir_override,
        ..Default::default()
    });

    config.validate()?;
    Ok(config)
}

/// Editor thresholds from the resolved configuration
pub fn thresholds(config: &LayeredConfig) -> EditorThresholds {
    EditorThresholds {
        select_px: config.select_threshold_px.value,
        close_px: config.close_threshold_px.value,
        double_click_window: Duration::from_millis(config.double_click_ms.value),
    }
}
