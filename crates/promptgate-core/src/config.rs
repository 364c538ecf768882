//! Configuration handling for promptgate

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PromptError;

/// Promptgate configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Prompt behavior settings
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Prompt behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Prompt even when no terminal is detected
    #[serde(default)]
    pub force_interactive: bool,

    /// Seconds to wait for an answer to a text prompt; `None` waits forever
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<f64>,

    /// Column at which notification text is wrapped
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_timeout_secs() -> Option<f64> {
    Some(36000.0)
}

fn default_wrap_width() -> usize {
    72
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            force_interactive: false,
            timeout_secs: default_timeout_secs(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl PromptConfig {
    /// The configured read timeout, rejecting negative or non-finite values
    pub fn timeout(&self) -> Result<Option<Duration>, PromptError> {
        self.timeout_secs.map(secs_to_duration).transpose()
    }
}

/// Convert a seconds value from a config file or flag into a `Duration`
pub fn secs_to_duration(secs: f64) -> Result<Duration, PromptError> {
    Duration::try_from_secs_f64(secs)
        .map_err(|_| PromptError::Config(format!("invalid timeout: {} seconds", secs)))
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, PromptError> {
        toml::from_str(content).map_err(|e| PromptError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, PromptError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}
