//! Error types for prompt operations

use thiserror::Error;

/// Core error type for prompt operations
#[derive(Error, Debug)]
pub enum PromptError {
    // === Input errors (E001-E002) ===
    /// E001: Deadline elapsed before a line arrived
    #[error("E001: Timed out waiting for answer to prompt '{prompt}'")]
    Timeout { prompt: String },

    /// E002: Input stream closed before a line was produced
    #[error("E002: Unexpected end of input")]
    UnexpectedEndOfInput,

    // === Session errors (E003) ===
    /// E003: Prompt requires a human but none is available
    #[error("E003: {}", non_interactive_message(.prompt, .cli_flag.as_deref()))]
    NonInteractiveEnvironment {
        prompt: String,
        cli_flag: Option<String>,
    },

    // === Validation errors (E004) ===
    /// E004: Default or selection outside the allowed set
    #[error("E004: Invalid choice: {reason}")]
    InvalidChoice { reason: String },

    // === IO and system errors ===
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

fn non_interactive_message(prompt: &str, cli_flag: Option<&str>) -> String {
    let mut msg = format!("Unable to get an answer for the question:\n{}", prompt);
    if let Some(flag) = cli_flag {
        msg.push_str(&format!(
            "\nYou can provide an answer on the command line with the {} flag.",
            flag
        ));
    }
    msg.push_str("\nRun in a terminal, or pass --force-interactive to prompt anyway.");
    msg
}

impl PromptError {
    /// Get the error code (e.g., "E001", "E002")
    pub fn code(&self) -> &'static str {
        match self {
            PromptError::Timeout { .. } => "E001",
            PromptError::UnexpectedEndOfInput => "E002",
            PromptError::NonInteractiveEnvironment { .. } => "E003",
            PromptError::InvalidChoice { .. } => "E004",
            PromptError::Io(_) => "E005",
            PromptError::Config(_) => "E006",
        }
    }

    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::Io(_) => 1,
            PromptError::InvalidChoice { .. } => 2,
            PromptError::Timeout { .. } => 3,
            PromptError::UnexpectedEndOfInput => 4,
            PromptError::NonInteractiveEnvironment { .. } => 5,
            PromptError::Config(_) => 6,
        }
    }

    /// Shorthand for an `InvalidChoice` with a formatted reason
    pub(crate) fn invalid_choice(reason: impl Into<String>) -> Self {
        PromptError::InvalidChoice {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type PromptResult<T> = Result<T, PromptError>;
