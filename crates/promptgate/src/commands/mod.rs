//! CLI command implementations

pub mod ask;
pub mod notify;
pub mod read_line;
pub mod split;
pub mod summarize;

pub use ask::run_ask;
pub use notify::run_notify;
pub use read_line::run_read_line;
pub use split::run_split;
pub use summarize::run_summarize;

use owo_colors::OwoColorize;
use promptgate_core::{Config, PromptError, PromptResult, Prompts};
use serde::Serialize;

use crate::colors::COLORS;
use crate::interaction::TerminalDisplay;
use crate::output::JsonResponse;

/// Settings shared by every command
pub struct RunContext {
    /// Output in JSON format
    pub json: bool,
    /// Suppress non-error output
    pub quiet: bool,
    /// Never prompt, whatever the terminal
    pub non_interactive: bool,
    /// File configuration with command line overrides applied
    pub config: Config,
}

impl RunContext {
    /// The terminal backend, blind to the terminal under `--non-interactive`
    pub fn display(&self) -> PromptResult<TerminalDisplay> {
        if self.non_interactive {
            TerminalDisplay::with_tty(&self.config.prompt, false)
        } else {
            TerminalDisplay::new(&self.config.prompt)
        }
    }

    /// The prompt facade over `display`, honoring the interactivity flags
    pub fn prompts<'d>(&self, display: &'d TerminalDisplay) -> Prompts<'d> {
        if self.non_interactive {
            Prompts::with_tty(display, false)
        } else {
            Prompts::new(display).force_interactive(self.config.prompt.force_interactive)
        }
    }
}

/// Print `err` for `command` and return its exit code
pub fn report_error<T: Serialize>(
    command: &str,
    ctx: &RunContext,
    data: T,
    err: &PromptError,
) -> i32 {
    if ctx.json {
        JsonResponse::error(command, data, vec![err.into()]).print();
    } else {
        eprintln!("{} {}", "error:".style(COLORS.fail), err);
    }
    err.exit_code()
}
