//! Terminal interaction module
//!
//! This module provides `TerminalDisplay`, the `Display` implementation that
//! renders prompts on an interactive terminal using dialoguer.

mod terminal;

pub use terminal::TerminalDisplay;
