//! Terminal display backend
//!
//! Menus, checklists and plain yes/no questions are rendered with dialoguer.
//! Free text, custom-label yes/no questions and notification pauses read a
//! line through the bounded reader so an unattended terminal cannot hang the
//! process past the configured timeout.

use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use console::{Style, Term};
use dialoguer::theme::Theme;
use dialoguer::{Confirm, MultiSelect, Select};
use owo_colors::OwoColorize;
use tracing::debug;

use promptgate_core::{
    Answer, Display, FdStream, LineReader, NotificationOptions, PromptConfig, PromptError,
    PromptResult, YesNoLabels, separate_list_input, wrap_text,
};

use crate::colors::COLORS;

/// Frame drawn above and below decorated notifications
const SIDE_FRAME: &str = "- - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -";

/// Exit status used when the user interrupts a prompt
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Install a Ctrl+C handler that restores the cursor before exiting.
///
/// dialoguer hides the cursor while a menu is open; dying on SIGINT without
/// this leaves the user's terminal without one.
pub fn setup_ctrl_c_handler() {
    static HANDLER_SET: AtomicBool = AtomicBool::new(false);

    if HANDLER_SET.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Err(e) = ctrlc::set_handler(move || {
        let term = Term::stderr();
        let _ = term.show_cursor();
        let _ = term.write_line("");
        std::process::exit(INTERRUPTED_EXIT_CODE);
    }) {
        eprintln!("warning: could not set Ctrl+C handler: {}", e);
    }
}

/// Prompt styling with a blank line between list items
struct SpacedTheme {
    prompt_style: Style,
    active_style: Style,
    inactive_style: Style,
    hint_style: Style,
}

impl SpacedTheme {
    fn new() -> Self {
        Self {
            prompt_style: Style::new().cyan().bold(),
            active_style: Style::new().cyan(),
            inactive_style: Style::new(),
            hint_style: Style::new().dim(),
        }
    }

    fn question(&self, prompt: &str) -> String {
        self.prompt_style.apply_to(format!("? {}", prompt)).to_string()
    }
}

impl Theme for SpacedTheme {
    fn format_prompt(&self, f: &mut dyn FmtWrite, prompt: &str) -> std::fmt::Result {
        write!(f, "{}", self.question(prompt))
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        default: Option<bool>,
    ) -> std::fmt::Result {
        let hint = match default {
            Some(true) => "(Y/n)",
            Some(false) => "(y/N)",
            None => "(y/n)",
        };
        write!(f, "{} {}", self.question(prompt), self.hint_style.apply_to(hint))
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        selection: Option<bool>,
    ) -> std::fmt::Result {
        let answer = match selection {
            Some(true) => "Yes",
            Some(false) => "No",
            None => "?",
        };
        write!(f, "{} {}", self.question(prompt), self.active_style.apply_to(answer))
    }

    fn format_select_prompt(&self, f: &mut dyn FmtWrite, prompt: &str) -> std::fmt::Result {
        write!(f, "{}", self.question(prompt))
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        sel: &str,
    ) -> std::fmt::Result {
        write!(f, "{} {}", self.question(prompt), self.active_style.apply_to(sel))
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn FmtWrite,
        text: &str,
        active: bool,
    ) -> std::fmt::Result {
        writeln!(f)?;
        if active {
            write!(f, "  {} {}", self.active_style.apply_to(">"), self.active_style.apply_to(text))
        } else {
            write!(f, "    {}", self.inactive_style.apply_to(text))
        }
    }

    fn format_multi_select_prompt(&self, f: &mut dyn FmtWrite, prompt: &str) -> std::fmt::Result {
        write!(f, "{}", self.question(prompt))
    }

    fn format_multi_select_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        selections: &[&str],
    ) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.question(prompt),
            self.active_style.apply_to(selections.join(", "))
        )
    }

    fn format_multi_select_prompt_item(
        &self,
        f: &mut dyn FmtWrite,
        text: &str,
        checked: bool,
        active: bool,
    ) -> std::fmt::Result {
        writeln!(f)?;
        let checkbox = if checked { "[x]" } else { "[ ]" };
        let style = if active { &self.active_style } else { &self.inactive_style };
        let cursor = if active { ">" } else { " " };
        write!(
            f,
            "  {} {} {}",
            style.apply_to(cursor),
            style.apply_to(checkbox),
            style.apply_to(text)
        )
    }
}

/// Display backend for an interactive terminal
pub struct TerminalDisplay {
    is_tty: bool,
    timeout: Option<Duration>,
    wrap_width: usize,
}

impl TerminalDisplay {
    /// Prompts render on stderr so answers on stdout can be captured
    pub fn new(config: &PromptConfig) -> PromptResult<Self> {
        let is_tty = io::stdin().is_terminal() && io::stderr().is_terminal();
        Self::with_tty(config, is_tty)
    }

    pub fn with_tty(config: &PromptConfig, is_tty: bool) -> PromptResult<Self> {
        setup_ctrl_c_handler();
        Ok(Self {
            is_tty,
            timeout: config.timeout()?,
            wrap_width: config.wrap_width,
        })
    }

    fn can_interact(&self, force_interactive: bool) -> bool {
        self.is_tty || force_interactive
    }

    fn require_tty(
        &self,
        message: &str,
        cli_flag: Option<&str>,
        force_interactive: bool,
    ) -> PromptResult<()> {
        if self.can_interact(force_interactive) {
            Ok(())
        } else {
            Err(PromptError::NonInteractiveEnvironment {
                prompt: message.to_string(),
                cli_flag: cli_flag.map(str::to_string),
            })
        }
    }

    fn convert_dialoguer_error(err: dialoguer::Error) -> PromptError {
        PromptError::Io(io::Error::other(err.to_string()))
    }

    /// Read one answer from stdin within the configured timeout
    fn read_answer(&self, prompt: &str) -> PromptResult<String> {
        let prompt = if self.is_tty {
            SpacedTheme::new().question(prompt) + " "
        } else {
            format!("{} ", prompt)
        };
        LineReader::new(FdStream::stdin(), io::stderr()).read_line(Some(&prompt), self.timeout)
    }

    /// Free text with a default and a 'c' escape hatch
    fn read_text(&self, message: &str, default: Option<&str>) -> PromptResult<Answer<String>> {
        let prompt = match default {
            Some(d) => format!("{} [{}] (Enter 'c' to cancel):", message, d),
            None => format!("{} (Enter 'c' to cancel):", message),
        };
        let line = self.read_answer(&prompt)?;
        Ok(parse_text_answer(&line, default))
    }

    /// Numbered menu answered by typing a number
    fn read_menu(&self, message: &str, choices: &[String]) -> PromptResult<Answer<usize>> {
        eprintln!("{}", render_numbered(message, choices));
        let prompt = format!(
            "Select the appropriate number [1-{}] then [enter] (press 'c' to cancel):",
            choices.len()
        );
        loop {
            let line = self.read_answer(&prompt)?;
            match parse_menu_answer(&line, choices.len()) {
                Some(answer) => return Ok(answer),
                None => eprintln!(
                    "{}",
                    "Your input was invalid. Please try again.".style(COLORS.warning)
                ),
            }
        }
    }

    /// Numbered checklist answered with a list of numbers
    fn read_checklist(
        &self,
        message: &str,
        choices: &[String],
    ) -> PromptResult<Answer<Vec<usize>>> {
        eprintln!("{}", render_numbered(message, choices));
        let prompt = "Select the appropriate numbers separated by commas and/or spaces, \
                      or leave input blank to select all options shown (Enter 'c' to cancel):";
        loop {
            let line = self.read_answer(prompt)?;
            match parse_checklist_answer(&line, choices.len()) {
                Some(answer) => return Ok(answer),
                None => eprintln!(
                    "{}",
                    "One or more of the numbers was not a valid choice. Please try again."
                        .style(COLORS.warning)
                ),
            }
        }
    }

    fn render_notification(&self, message: &str, options: NotificationOptions) -> String {
        let text = if options.wrap {
            wrap_text(message, self.wrap_width)
        } else {
            message.to_string()
        };
        if !options.decorate {
            return text;
        }
        let frame = if self.is_tty {
            SIDE_FRAME.style(COLORS.active).to_string()
        } else {
            SIDE_FRAME.to_string()
        };
        format!("{}\n{}\n{}", frame, text, frame)
    }
}

impl Display for TerminalDisplay {
    fn notification(&self, message: &str, options: NotificationOptions) -> PromptResult<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", self.render_notification(message, options))?;
        stderr.flush()?;
        drop(stderr);

        if !options.pause {
            return Ok(());
        }
        if !self.can_interact(options.force_interactive) {
            debug!("not pausing for user confirmation");
            return Ok(());
        }
        LineReader::new(FdStream::stdin(), io::stderr())
            .read_line(Some("Press Enter to Continue"), self.timeout)?;
        Ok(())
    }

    fn menu(
        &self,
        message: &str,
        choices: &[String],
        default: Option<usize>,
        cli_flag: Option<&str>,
        force_interactive: bool,
    ) -> PromptResult<Answer<usize>> {
        self.require_tty(message, cli_flag, force_interactive)?;
        if !self.is_tty {
            return self.read_menu(message, choices);
        }

        let theme = SpacedTheme::new();
        eprintln!();

        let selection = Select::with_theme(&theme)
            .with_prompt(message)
            .items(choices)
            .default(default.unwrap_or(0))
            .interact_opt()
            .map_err(Self::convert_dialoguer_error)?;
        Ok(selection.map_or(Answer::Cancelled, Answer::Confirmed))
    }

    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        cli_flag: Option<&str>,
        force_interactive: bool,
    ) -> PromptResult<Answer<String>> {
        self.require_tty(message, cli_flag, force_interactive)?;
        self.read_text(message, default)
    }

    fn yesno(
        &self,
        message: &str,
        labels: &YesNoLabels,
        default: Option<bool>,
        cli_flag: Option<&str>,
        force_interactive: bool,
    ) -> PromptResult<bool> {
        self.require_tty(message, cli_flag, force_interactive)?;

        if *labels == YesNoLabels::default() && self.is_tty {
            let theme = SpacedTheme::new();
            let mut confirm = Confirm::with_theme(&theme).with_prompt(message);
            if let Some(d) = default {
                confirm = confirm.default(d);
            }
            return confirm.interact().map_err(Self::convert_dialoguer_error);
        }

        let prompt = format!("{} [{}/{}]", message, labels.yes, labels.no);
        loop {
            let line = self.read_answer(&prompt)?;
            if let Some(answer) = parse_yesno_answer(&line, labels, default) {
                return Ok(answer);
            }
            eprintln!(
                "{}",
                format!("Please answer {} or {}.", labels.yes, labels.no).style(COLORS.warning)
            );
        }
    }

    fn checklist(
        &self,
        message: &str,
        choices: &[String],
        default: Option<&[usize]>,
        cli_flag: Option<&str>,
        force_interactive: bool,
    ) -> PromptResult<Answer<Vec<usize>>> {
        self.require_tty(message, cli_flag, force_interactive)?;

        let checked: Vec<bool> = (0..choices.len())
            .map(|i| default.is_some_and(|d| d.contains(&i)))
            .collect();

        if !self.is_tty {
            return self.read_checklist(message, choices);
        }

        let theme = SpacedTheme::new();
        eprintln!();

        let selection = MultiSelect::with_theme(&theme)
            .with_prompt(message)
            .items(choices)
            .defaults(&checked)
            .interact_opt()
            .map_err(Self::convert_dialoguer_error)?;
        Ok(selection.map_or(Answer::Cancelled, Answer::Confirmed))
    }

    fn directory_select(
        &self,
        message: &str,
        default: Option<&str>,
        cli_flag: Option<&str>,
        force_interactive: bool,
    ) -> PromptResult<Answer<String>> {
        self.require_tty(message, cli_flag, force_interactive)?;
        self.read_text(message, default)
    }
}

/// Interpret a free text answer: 'c' cancels, blank takes the default
fn parse_text_answer(line: &str, default: Option<&str>) -> Answer<String> {
    let answer = line.trim();
    if answer.eq_ignore_ascii_case("c") {
        return Answer::Cancelled;
    }
    match default {
        Some(d) if answer.is_empty() => Answer::Confirmed(d.to_string()),
        _ => Answer::Confirmed(answer.to_string()),
    }
}

/// `message` followed by `choices` numbered from 1
fn render_numbered(message: &str, choices: &[String]) -> String {
    let mut out = message.to_string();
    for (i, choice) in choices.iter().enumerate() {
        out.push_str(&format!("\n{}: {}", i + 1, choice));
    }
    out
}

/// Interpret a menu answer as a zero-based index; `None` re-asks
fn parse_menu_answer(line: &str, count: usize) -> Option<Answer<usize>> {
    let answer = line.trim();
    if answer.eq_ignore_ascii_case("c") {
        return Some(Answer::Cancelled);
    }
    match answer.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(Answer::Confirmed(n - 1)),
        _ => None,
    }
}

/// Interpret a checklist answer; blank selects everything, `None` re-asks
fn parse_checklist_answer(line: &str, count: usize) -> Option<Answer<Vec<usize>>> {
    let answer = line.trim();
    if answer.eq_ignore_ascii_case("c") {
        return Some(Answer::Cancelled);
    }
    if answer.is_empty() {
        return Some(Answer::Confirmed((0..count).collect()));
    }

    let mut selected = Vec::new();
    for token in separate_list_input(answer) {
        match token.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => {
                if !selected.contains(&(n - 1)) {
                    selected.push(n - 1);
                }
            }
            _ => return None,
        }
    }
    selected.sort_unstable();
    Some(Answer::Confirmed(selected))
}

/// Interpret a yes/no answer; `None` when it matches neither label
fn parse_yesno_answer(line: &str, labels: &YesNoLabels, default: Option<bool>) -> Option<bool> {
    let answer = line.trim();
    if answer.is_empty() {
        return default;
    }
    if matches_label(answer, &labels.yes) {
        Some(true)
    } else if matches_label(answer, &labels.no) {
        Some(false)
    } else {
        None
    }
}

/// The full label or its first letter, ignoring case
fn matches_label(answer: &str, label: &str) -> bool {
    if answer.to_lowercase() == label.to_lowercase() {
        return true;
    }
    let mut chars = answer.chars();
    match (chars.next(), chars.next(), label.chars().next()) {
        (Some(a), None, Some(l)) => a.to_lowercase().eq(l.to_lowercase()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(is_tty: bool) -> TerminalDisplay {
        TerminalDisplay::with_tty(&PromptConfig::default(), is_tty).unwrap()
    }

    #[test]
    fn test_with_tty_override() {
        assert!(display(true).is_tty);
        assert!(!display(false).is_tty);
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let config = PromptConfig {
            timeout_secs: Some(f64::NAN),
            ..PromptConfig::default()
        };
        assert!(matches!(
            TerminalDisplay::with_tty(&config, true),
            Err(PromptError::Config(_))
        ));
    }

    #[test]
    fn test_non_tty_returns_error_for_input() {
        let result = display(false).input("Email?", None, Some("--email"), false);
        match result {
            Err(PromptError::NonInteractiveEnvironment { prompt, cli_flag }) => {
                assert_eq!(prompt, "Email?");
                assert_eq!(cli_flag.as_deref(), Some("--email"));
            }
            other => panic!("expected non-interactive error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_tty_returns_error_for_menu() {
        let choices = vec!["a".to_string(), "b".to_string()];
        let result = display(false).menu("Pick", &choices, None, None, false);
        assert!(matches!(
            result,
            Err(PromptError::NonInteractiveEnvironment { .. })
        ));
    }

    #[test]
    fn test_non_tty_returns_error_for_yesno() {
        let labels = YesNoLabels::default();
        let result = display(false).yesno("Sure?", &labels, Some(true), None, false);
        assert!(matches!(
            result,
            Err(PromptError::NonInteractiveEnvironment { .. })
        ));
    }

    #[test]
    fn test_non_tty_returns_error_for_checklist() {
        let choices = vec!["a".to_string()];
        let result = display(false).checklist("Pick", &choices, None, None, false);
        assert!(matches!(
            result,
            Err(PromptError::NonInteractiveEnvironment { .. })
        ));
    }

    #[test]
    fn test_non_tty_returns_error_for_directory_select() {
        let result = display(false).directory_select("Where?", None, None, false);
        assert!(matches!(
            result,
            Err(PromptError::NonInteractiveEnvironment { .. })
        ));
    }

    #[test]
    fn test_quiet_notification_does_not_block() {
        display(false)
            .notification("informational", NotificationOptions::QUIET)
            .unwrap();
    }

    #[test]
    fn test_prominent_notification_skips_pause_without_tty() {
        display(false)
            .notification("must be seen", NotificationOptions::PROMINENT)
            .unwrap();
    }

    #[test]
    fn test_render_plain_notification() {
        let rendered = display(false).render_notification("a b c", NotificationOptions::QUIET);
        assert_eq!(rendered, "a b c");
    }

    #[test]
    fn test_render_decorated_notification() {
        let config = PromptConfig {
            wrap_width: 5,
            ..PromptConfig::default()
        };
        let display = TerminalDisplay::with_tty(&config, false).unwrap();
        let rendered = display.render_notification("aaa bbb", NotificationOptions::PROMINENT);
        assert_eq!(
            rendered,
            format!("{}\naaa\nbbb\n{}", SIDE_FRAME, SIDE_FRAME)
        );
    }

    #[test]
    fn test_parse_text_answer() {
        assert_eq!(parse_text_answer("c", None), Answer::Cancelled);
        assert_eq!(parse_text_answer(" C ", Some("x")), Answer::Cancelled);
        assert_eq!(
            parse_text_answer("", Some("/var/www")),
            Answer::Confirmed("/var/www".to_string())
        );
        assert_eq!(parse_text_answer("", None), Answer::Confirmed(String::new()));
        assert_eq!(
            parse_text_answer("  me@example.com ", None),
            Answer::Confirmed("me@example.com".to_string())
        );
    }

    #[test]
    fn test_parse_yesno_answer() {
        let labels = YesNoLabels {
            yes: "Agree".to_string(),
            no: "Cancel".to_string(),
        };
        assert_eq!(parse_yesno_answer("a", &labels, None), Some(true));
        assert_eq!(parse_yesno_answer("AGREE", &labels, None), Some(true));
        assert_eq!(parse_yesno_answer("c", &labels, None), Some(false));
        assert_eq!(parse_yesno_answer("", &labels, Some(false)), Some(false));
        assert_eq!(parse_yesno_answer("", &labels, None), None);
        assert_eq!(parse_yesno_answer("maybe", &labels, Some(true)), None);
    }

    #[test]
    fn test_render_numbered() {
        let choices = vec!["apache".to_string(), "nginx".to_string()];
        assert_eq!(
            render_numbered("Pick a plugin", &choices),
            "Pick a plugin\n1: apache\n2: nginx"
        );
    }

    #[test]
    fn test_parse_menu_answer() {
        assert_eq!(parse_menu_answer("2\n", 3), Some(Answer::Confirmed(1)));
        assert_eq!(parse_menu_answer(" 1 ", 3), Some(Answer::Confirmed(0)));
        assert_eq!(parse_menu_answer("C", 3), Some(Answer::Cancelled));
        assert_eq!(parse_menu_answer("0", 3), None);
        assert_eq!(parse_menu_answer("4", 3), None);
        assert_eq!(parse_menu_answer("two", 3), None);
        assert_eq!(parse_menu_answer("", 3), None);
    }

    #[test]
    fn test_parse_checklist_answer() {
        assert_eq!(
            parse_checklist_answer("3, 1 1", 3),
            Some(Answer::Confirmed(vec![0, 2]))
        );
        assert_eq!(
            parse_checklist_answer("", 3),
            Some(Answer::Confirmed(vec![0, 1, 2]))
        );
        assert_eq!(parse_checklist_answer("c", 3), Some(Answer::Cancelled));
        assert_eq!(parse_checklist_answer("1 4", 3), None);
        assert_eq!(parse_checklist_answer("1,x", 3), None);
    }
}
