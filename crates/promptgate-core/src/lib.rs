//! promptgate-core: prompts that never hang
//!
//! This crate provides bounded-time line reads, normalization of free-form
//! list answers, and the prompt facade that forwards to a display backend.

/// Error types for prompt operations
pub mod error;

/// Configuration handling
pub mod config;

/// List tokenizing and summaries
pub mod text;

/// Bounded-time line reads
pub mod reader;

/// Display backend interface
pub mod display;

/// Prompt facade
pub mod prompts;

// Re-exports for convenience
pub use config::{Config, PromptConfig};
pub use display::{Answer, Display, NotificationOptions, YesNoLabels};
pub use error::{PromptError, PromptResult};
pub use prompts::{
    ChecklistOptions, InputOptions, MenuOptions, PromptOptions, Prompts, YesNoOptions,
};
pub use reader::{Clock, FdStream, LineReader, ReadableStream, SystemClock, input_with_timeout};
pub use text::{separate_list_input, summarize_domain_list, wrap_text};
