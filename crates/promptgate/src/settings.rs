//! Configuration discovery and command line overrides

use std::path::{Path, PathBuf};

use anyhow::Context;
use promptgate_core::Config;

/// `<config dir>/promptgate/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("promptgate").join("config.toml"))
}

/// Load the explicit config file, else the default one if present, else defaults
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }
    match default_config_path() {
        Some(path) if path.is_file() => Config::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        _ => Ok(Config::default()),
    }
}

/// Apply `--force-interactive` and `--timeout` on top of the file settings
pub fn apply_overrides(
    mut config: Config,
    force_interactive: bool,
    timeout: Option<f64>,
) -> Config {
    if force_interactive {
        config.prompt.force_interactive = true;
    }
    if let Some(secs) = timeout {
        config.prompt.timeout_secs = Some(secs);
    }
    config
}
