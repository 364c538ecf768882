//! The interactive display capability prompts are forwarded to
//!
//! A `Display` renders prompts and collects answers. This crate never renders
//! anything itself; the binary supplies a terminal implementation and tests
//! supply recording fakes.

use crate::error::PromptResult;

/// Outcome of a prompt the user may back out of
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    /// The user confirmed a value
    Confirmed(T),
    /// The user cancelled the prompt
    Cancelled,
}

impl<T> Answer<T> {
    /// The confirmed value, if any
    pub fn confirmed(self) -> Option<T> {
        match self {
            Answer::Confirmed(value) => Some(value),
            Answer::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Answer::Cancelled)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Answer<U> {
        match self {
            Answer::Confirmed(value) => Answer::Confirmed(f(value)),
            Answer::Cancelled => Answer::Cancelled,
        }
    }
}

/// How a notification is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationOptions {
    /// Wait for the user to acknowledge the message
    pub pause: bool,
    /// Frame the message so it stands out
    pub decorate: bool,
    /// Wrap long lines to the display width
    pub wrap: bool,
    /// Pause even when no terminal is detected
    pub force_interactive: bool,
}

impl NotificationOptions {
    /// Plain, non-blocking output
    pub const QUIET: Self = Self {
        pause: false,
        decorate: false,
        wrap: false,
        force_interactive: false,
    };

    /// A message the user must see: paused, framed and wrapped
    pub const PROMINENT: Self = Self {
        pause: true,
        decorate: true,
        wrap: true,
        force_interactive: false,
    };
}

impl Default for NotificationOptions {
    fn default() -> Self {
        Self::PROMINENT
    }
}

/// Labels for the two answers of a yes/no question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YesNoLabels {
    pub yes: String,
    pub no: String,
}

impl Default for YesNoLabels {
    fn default() -> Self {
        Self {
            yes: "Yes".to_string(),
            no: "No".to_string(),
        }
    }
}

/// Rendering backend for prompts
///
/// `cli_flag` names the command line flag that answers the prompt without
/// interaction; backends only use it to enrich error messages.
pub trait Display {
    /// Show a message
    fn notification(&self, message: &str, options: NotificationOptions) -> PromptResult<()>;

    /// Pick one item from `choices`, returning its index
    fn menu(
        &self,
        message: &str,
        choices: &[String],
        default: Option<usize>,
        cli_flag: Option<&str>,
        force_interactive: bool,
    ) -> PromptResult<Answer<usize>>;

    /// Free text input
    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        cli_flag: Option<&str>,
        force_interactive: bool,
    ) -> PromptResult<Answer<String>>;

    /// Yes/no question
    fn yesno(
        &self,
        message: &str,
        labels: &YesNoLabels,
        default: Option<bool>,
        cli_flag: Option<&str>,
        force_interactive: bool,
    ) -> PromptResult<bool>;

    /// Pick any number of items from `choices`, returning their indices
    fn checklist(
        &self,
        message: &str,
        choices: &[String],
        default: Option<&[usize]>,
        cli_flag: Option<&str>,
        force_interactive: bool,
    ) -> PromptResult<Answer<Vec<usize>>>;

    /// Choose a directory path
    fn directory_select(
        &self,
        message: &str,
        default: Option<&str>,
        cli_flag: Option<&str>,
        force_interactive: bool,
    ) -> PromptResult<Answer<String>>;
}
