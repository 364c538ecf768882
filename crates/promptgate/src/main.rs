//! promptgate CLI - terminal prompts that never hang

mod cli;
mod colors;
mod commands;
mod interaction;
mod logging;
mod output;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::RunContext;

/// Exit code when configuration cannot be loaded
const CONFIG_ERROR_EXIT_CODE: u8 = 6;

fn main() -> ExitCode {
    let cli = cli::parse();
    logging::init(cli.verbose);

    let config = match settings::load_config(cli.config.as_deref()) {
        Ok(config) => settings::apply_overrides(config, cli.force_interactive, cli.timeout),
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(CONFIG_ERROR_EXIT_CODE);
        }
    };

    let ctx = RunContext {
        json: cli.json,
        quiet: cli.quiet,
        non_interactive: cli.non_interactive,
        config,
    };

    let result = match cli.command {
        Commands::Split { text } => commands::run_split(text, &ctx),
        Commands::Summarize { names } => commands::run_summarize(names, &ctx),
        Commands::ReadLine { prompt } => commands::run_read_line(prompt, &ctx),
        Commands::Notify { message, prominent } => commands::run_notify(message, prominent, &ctx),
        Commands::Ask(ask_cmd) => commands::run_ask(ask_cmd, &ctx),
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
