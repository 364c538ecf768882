//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Promptgate - terminal prompts that never hang
#[derive(Parser)]
#[command(name = "promptgate")]
#[command(version = VERSION)]
#[command(about = "Terminal prompts that never hang")]
#[command(long_about = "Promptgate asks questions on the terminal: menus, checklists, yes/no, free text and directories.\n\nWhen no terminal is attached, prompts with a default answer resolve to it and prompts without one fail immediately. Text answers are read with a timeout so an unattended session cannot block forever.")]
pub struct Cli {
    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to <config dir>/promptgate/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prompt even when no terminal is detected
    #[arg(long, global = true, conflicts_with = "non_interactive")]
    pub force_interactive: bool,

    /// Never prompt; use defaults or fail
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Seconds to wait for a text answer
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split comma and/or whitespace separated text into items
    ///
    /// Reads one line from stdin when TEXT is not given.
    Split {
        /// Text to split
        text: Option<String>,
    },

    /// Summarize a list of domain names in one line
    Summarize {
        /// Names to summarize, first one is shown in full
        names: Vec<String>,
    },

    /// Read one line from stdin within the timeout
    ReadLine {
        /// Prompt written before reading
        #[arg(long)]
        prompt: Option<String>,
    },

    /// Show a message
    Notify {
        /// Message text
        message: String,

        /// Frame, wrap and wait for Enter
        #[arg(long)]
        prominent: bool,
    },

    /// Ask a question
    #[command(subcommand)]
    Ask(AskCommands),
}

/// Options shared by every question
#[derive(Args, Debug, Clone)]
pub struct QuestionArgs {
    /// Question text
    pub message: String,

    /// Flag that answers this question non-interactively, shown in errors
    #[arg(long, value_name = "FLAG", allow_hyphen_values = true)]
    pub cli_flag: Option<String>,
}

#[derive(Subcommand)]
pub enum AskCommands {
    /// Free text answer
    Text {
        #[command(flatten)]
        question: QuestionArgs,

        /// Default answer
        #[arg(long)]
        default: Option<String>,
    },

    /// Free text answer split into a list
    List {
        #[command(flatten)]
        question: QuestionArgs,

        /// Default answer, split the same way
        #[arg(long)]
        default: Option<String>,
    },

    /// Pick one choice
    Menu {
        #[command(flatten)]
        question: QuestionArgs,

        /// A choice (repeat for each)
        #[arg(long = "choice", required = true)]
        choices: Vec<String>,

        /// Zero-based index of the default choice
        #[arg(long)]
        default: Option<usize>,
    },

    /// Yes or no
    Yesno {
        #[command(flatten)]
        question: QuestionArgs,

        /// Label for the affirmative answer
        #[arg(long, default_value = "Yes")]
        yes_label: String,

        /// Label for the negative answer
        #[arg(long, default_value = "No")]
        no_label: String,

        /// Default answer
        #[arg(long)]
        default: Option<bool>,
    },

    /// Pick any number of choices
    Checklist {
        #[command(flatten)]
        question: QuestionArgs,

        /// A choice (repeat for each)
        #[arg(long = "choice", required = true)]
        choices: Vec<String>,

        /// Zero-based index of a preselected choice (repeat for each)
        #[arg(long)]
        default: Vec<usize>,
    },

    /// Choose a directory
    Dir {
        #[command(flatten)]
        question: QuestionArgs,

        /// Default directory
        #[arg(long)]
        default: Option<String>,
    },
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_menu() {
        let cli = Cli::try_parse_from([
            "promptgate",
            "ask",
            "menu",
            "Pick a plugin",
            "--choice",
            "apache",
            "--choice",
            "nginx",
            "--default",
            "1",
            "--cli-flag=--installer",
        ])
        .unwrap();
        match cli.command {
            Commands::Ask(AskCommands::Menu {
                question,
                choices,
                default,
            }) => {
                assert_eq!(question.message, "Pick a plugin");
                assert_eq!(question.cli_flag.as_deref(), Some("--installer"));
                assert_eq!(choices, vec!["apache", "nginx"]);
                assert_eq!(default, Some(1));
            }
            _ => panic!("expected ask menu"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["promptgate", "read-line", "--timeout", "0.5", "--json"])
            .unwrap();
        assert_eq!(cli.timeout, Some(0.5));
        assert!(cli.json);
    }

    #[test]
    fn test_interactive_flags_conflict() {
        let result = Cli::try_parse_from([
            "promptgate",
            "--force-interactive",
            "--non-interactive",
            "split",
            "a",
        ]);
        assert!(result.is_err());
    }
}
