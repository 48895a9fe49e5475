//! Init command

use std::fs;
use std::path::Path;

use color_eyre::eyre::{eyre, Result};
use tracing::{info, warn};

use quorumvote_config::Config;

/// Execute the init command
pub fn run(config_file: &Path, config: &Config, force: bool) -> Result<()> {
    if config_file.exists() && !force {
        warn!(
            "Configuration file already exists at {}, use --force to overwrite it",
            config_file.display()
        );
        return Ok(());
    }

    info!("Saving configuration to {}", config_file.display());
    save_config(config_file, config)
}

/// Save configuration to file
pub fn save_config(config_file: &Path, config: &Config) -> Result<()> {
    save(config_file, &toml::to_string_pretty(config)?)
}

fn save(path: &Path, data: &str) -> Result<()> {
    if let Some(parent_dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent_dir).map_err(|e| {
            eyre!(
                "Failed to create parent directory {}: {e:?}",
                parent_dir.display()
            )
        })?;
    }

    fs::write(path, data)
        .map_err(|e| eyre!("Failed to write configuration to {}: {e:?}", path.display()))
}
