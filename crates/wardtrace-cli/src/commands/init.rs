//! Init command implementation

use crate::cli::InitArgs;
use crate::config_loader::DATA_DIR_NAME;
use crate::output::OutputWriter;
use crate::output_types::InitOutput;
use anyhow::{bail, Context, Result};
use std::fs;

pub fn execute(args: InitArgs, output: &OutputWriter) -> Result<()> {
    let data_dir = args.path.join(DATA_DIR_NAME);
    if data_dir.exists() && !args.force {
        bail!(
            "Data directory already exists at {}. Use --force to overwrite",
            data_dir.display()
        );
    }

    fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

    // Create config.toml with the documented defaults
    let config_path = data_dir.join("config.toml");
    let config_toml = r#"# Wardtrace Configuration

# Pixel radius that selects an existing outline corner instead of adding one
select_threshold_px = 10.0

# Pixel radius around the first corner that closes an outline.
# Must be strictly larger than select_threshold_px.
close_threshold_px = 40.0

# Two clicks on the same corner within this window (milliseconds) delete it
double_click_ms = 300
"#;
    fs::write(&config_path, config_toml).context("Failed to write config.toml")?;

    if output.is_json() {
        let json_output = InitOutput {
            data_dir: data_dir.display().to_string(),
        };
        output.result(json_output)?;
    } else {
        output.success(format!(
            "Initialized wardtrace data directory at {}",
            data_dir.display()
        ));
        output.info("Import drawn rooms with 'wardtrace rooms add <draft.json>'");
    }

    Ok(())
}
