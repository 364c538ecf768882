//! Prompt facade
//!
//! `Prompts` validates arguments, applies the non-interactive policy and
//! forwards everything else to a `Display` untouched. When the process has no
//! terminal and the caller did not force interaction, prompts with a default
//! answer resolve to it and prompts without one fail immediately instead of
//! waiting for input that can never arrive.

use std::io::IsTerminal;

use tracing::debug;

use crate::display::{Answer, Display, NotificationOptions, YesNoLabels};
use crate::error::{PromptError, PromptResult};
use crate::text::separate_list_input;

/// Per-call prompt settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions<D> {
    /// Answer used when the user accepts the default or cannot be asked
    pub default: Option<D>,
    /// Command line flag that answers this prompt, for error messages
    pub cli_flag: Option<String>,
    /// Prompt even when no terminal is detected
    pub force_interactive: bool,
}

impl<D> Default for PromptOptions<D> {
    fn default() -> Self {
        Self {
            default: None,
            cli_flag: None,
            force_interactive: false,
        }
    }
}

impl<D> PromptOptions<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, default: D) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_cli_flag(mut self, flag: impl Into<String>) -> Self {
        self.cli_flag = Some(flag.into());
        self
    }

    pub fn forced(mut self) -> Self {
        self.force_interactive = true;
        self
    }
}

pub type MenuOptions = PromptOptions<usize>;
pub type InputOptions = PromptOptions<String>;
pub type YesNoOptions = PromptOptions<bool>;
pub type ChecklistOptions = PromptOptions<Vec<usize>>;

/// Entry point for all prompts
pub struct Prompts<'d> {
    display: &'d dyn Display,
    is_tty: bool,
    force_interactive: bool,
}

impl<'d> Prompts<'d> {
    /// Interactive when stdin and stderr are terminals.
    ///
    /// Prompts render on stderr, so stdout may be redirected to capture
    /// answers without turning prompts off.
    pub fn new(display: &'d dyn Display) -> Self {
        let is_tty = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();
        Self::with_tty(display, is_tty)
    }

    pub fn with_tty(display: &'d dyn Display, is_tty: bool) -> Self {
        Self {
            display,
            is_tty,
            force_interactive: false,
        }
    }

    /// Treat every prompt as forced interactive (e.g. from configuration)
    pub fn force_interactive(mut self, force: bool) -> Self {
        self.force_interactive = force;
        self
    }

    pub fn is_tty(&self) -> bool {
        self.is_tty
    }

    /// The per-call override combined with the facade's own
    fn effective_force(&self, force_interactive: bool) -> bool {
        self.force_interactive || force_interactive
    }

    fn can_interact(&self, force_interactive: bool) -> bool {
        self.is_tty || self.effective_force(force_interactive)
    }

    /// Resolve a prompt without the display when nobody can answer it
    fn fallback<D: Clone>(
        &self,
        message: &str,
        options: &PromptOptions<D>,
    ) -> PromptResult<Option<D>> {
        if self.can_interact(options.force_interactive) {
            return Ok(None);
        }
        match &options.default {
            Some(default) => {
                debug!(prompt = message, "no terminal, falling back to default answer");
                Ok(Some(default.clone()))
            }
            None => Err(PromptError::NonInteractiveEnvironment {
                prompt: message.to_string(),
                cli_flag: options.cli_flag.clone(),
            }),
        }
    }

    /// Informational message: no pause, no frame, no wrapping
    pub fn notify(&self, message: &str) -> PromptResult<()> {
        self.notification_with(message, NotificationOptions::QUIET)
    }

    /// Message the user must see: paused, framed and wrapped
    pub fn notification(&self, message: &str) -> PromptResult<()> {
        self.notification_with(message, NotificationOptions::PROMINENT)
    }

    /// Forward `options` as given; whether to pause is the display's call
    pub fn notification_with(
        &self,
        message: &str,
        mut options: NotificationOptions,
    ) -> PromptResult<()> {
        options.force_interactive = self.effective_force(options.force_interactive);
        self.display.notification(message, options)
    }

    /// Pick one of `choices`
    pub fn menu(
        &self,
        message: &str,
        choices: &[String],
        options: &MenuOptions,
    ) -> PromptResult<Answer<usize>> {
        ensure_choices(choices)?;
        if let Some(default) = options.default {
            ensure_index(default, choices.len(), "default")?;
        }
        if let Some(default) = self.fallback(message, options)? {
            return Ok(Answer::Confirmed(default));
        }

        let answer = self.display.menu(
            message,
            choices,
            options.default,
            options.cli_flag.as_deref(),
            self.effective_force(options.force_interactive),
        )?;
        if let Answer::Confirmed(index) = &answer {
            ensure_index(*index, choices.len(), "selection")?;
        }
        Ok(answer)
    }

    /// Free text answer
    pub fn input_text(
        &self,
        message: &str,
        options: &InputOptions,
    ) -> PromptResult<Answer<String>> {
        if let Some(default) = self.fallback(message, options)? {
            return Ok(Answer::Confirmed(default));
        }
        self.display.input(
            message,
            options.default.as_deref(),
            options.cli_flag.as_deref(),
            self.effective_force(options.force_interactive),
        )
    }

    /// Free text answer split into a list, e.g. "a.com, b.com c.com"
    pub fn input_list(
        &self,
        message: &str,
        options: &InputOptions,
    ) -> PromptResult<Answer<Vec<String>>> {
        Ok(self
            .input_text(message, options)?
            .map(|text| separate_list_input(&text)))
    }

    /// Yes/no question with "Yes"/"No" labels
    pub fn yesno(&self, message: &str, options: &YesNoOptions) -> PromptResult<bool> {
        self.yesno_with_labels(message, &YesNoLabels::default(), options)
    }

    pub fn yesno_with_labels(
        &self,
        message: &str,
        labels: &YesNoLabels,
        options: &YesNoOptions,
    ) -> PromptResult<bool> {
        if labels.yes.trim().is_empty() || labels.no.trim().is_empty() {
            return Err(PromptError::invalid_choice("yes/no labels cannot be empty"));
        }
        if let Some(default) = self.fallback(message, options)? {
            return Ok(default);
        }
        self.display.yesno(
            message,
            labels,
            options.default,
            options.cli_flag.as_deref(),
            self.effective_force(options.force_interactive),
        )
    }

    /// Pick any number of `choices`
    pub fn checklist(
        &self,
        message: &str,
        choices: &[String],
        options: &ChecklistOptions,
    ) -> PromptResult<Answer<Vec<usize>>> {
        ensure_choices(choices)?;
        for &index in options.default.iter().flatten() {
            ensure_index(index, choices.len(), "default")?;
        }
        if let Some(default) = self.fallback(message, options)? {
            return Ok(Answer::Confirmed(default));
        }

        let answer = self.display.checklist(
            message,
            choices,
            options.default.as_deref(),
            options.cli_flag.as_deref(),
            self.effective_force(options.force_interactive),
        )?;
        if let Answer::Confirmed(selected) = &answer {
            for &index in selected {
                ensure_index(index, choices.len(), "selection")?;
            }
        }
        Ok(answer)
    }

    /// Choose a directory
    pub fn directory_select(
        &self,
        message: &str,
        options: &InputOptions,
    ) -> PromptResult<Answer<String>> {
        if let Some(default) = self.fallback(message, options)? {
            return Ok(Answer::Confirmed(default));
        }
        self.display.directory_select(
            message,
            options.default.as_deref(),
            options.cli_flag.as_deref(),
            self.effective_force(options.force_interactive),
        )
    }
}

fn ensure_choices(choices: &[String]) -> PromptResult<()> {
    if choices.is_empty() {
        return Err(PromptError::invalid_choice("choices cannot be empty"));
    }
    Ok(())
}

fn ensure_index(index: usize, len: usize, what: &str) -> PromptResult<()> {
    if index >= len {
        return Err(PromptError::invalid_choice(format!(
            "{} {} is out of range for {} choices",
            what, index, len
        )));
    }
    Ok(())
}
