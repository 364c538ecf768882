//! Semantic color theme for consistent terminal output
//!
//! - `ACTIVE` => blue - notification frames, headers
//! - `WARNING` => yellow - re-prompts, cancelled prompts
//! - `FAIL` => red - errors

use std::sync::LazyLock;

use owo_colors::Style;

/// Semantic color definitions for terminal output
pub struct SemanticColors {
    /// Blue - notification frames, headers
    pub active: Style,
    /// Yellow - re-prompts, cancelled prompts
    pub warning: Style,
    /// Red - errors
    pub fail: Style,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            active: Style::new().blue(),
            warning: Style::new().yellow(),
            fail: Style::new().red().bold(),
        }
    }
}

/// Global default theme
pub static COLORS: LazyLock<SemanticColors> = LazyLock::new(SemanticColors::default);
