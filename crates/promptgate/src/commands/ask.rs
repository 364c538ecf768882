//! Implementation of the `promptgate ask` commands
//!
//! Confirmed answers go to stdout (menu and checklist print the chosen
//! labels, `--json` gives indices); a cancelled prompt exits with status 1.

use owo_colors::OwoColorize;
use promptgate_core::{Answer, PromptOptions, PromptResult, YesNoLabels};
use serde::Serialize;

use super::{RunContext, report_error};
use crate::cli::{AskCommands, QuestionArgs};
use crate::colors::COLORS;
use crate::output::{AnswerData, JsonResponse};

/// Exit code for a prompt the user backed out of
const CANCELLED_EXIT_CODE: i32 = 1;

/// Run one of the ask subcommands
pub fn run_ask(command: AskCommands, ctx: &RunContext) -> Result<i32, String> {
    let display = match ctx.display() {
        Ok(display) => display,
        Err(e) => return Ok(report_error("ask", ctx, AnswerData::<String> { value: None }, &e)),
    };
    let prompts = ctx.prompts(&display);

    let code = match command {
        AskCommands::Text { question, default } => {
            let options = prompt_options(&question, default);
            let answer = prompts.input_text(&question.message, &options);
            finish("ask text", ctx, answer, |text| vec![text.clone()])
        }
        AskCommands::List { question, default } => {
            let options = prompt_options(&question, default);
            let answer = prompts.input_list(&question.message, &options);
            finish("ask list", ctx, answer, |items| items.clone())
        }
        AskCommands::Menu {
            question,
            choices,
            default,
        } => {
            let options = prompt_options(&question, default);
            let answer = prompts.menu(&question.message, &choices, &options);
            finish("ask menu", ctx, answer, |&index| vec![choices[index].clone()])
        }
        AskCommands::Yesno {
            question,
            yes_label,
            no_label,
            default,
        } => {
            let labels = YesNoLabels {
                yes: yes_label,
                no: no_label,
            };
            let options = prompt_options(&question, default);
            let answer = prompts
                .yesno_with_labels(&question.message, &labels, &options)
                .map(Answer::Confirmed);
            finish("ask yesno", ctx, answer, |&agreed| {
                let label = if agreed { &labels.yes } else { &labels.no };
                vec![label.clone()]
            })
        }
        AskCommands::Checklist {
            question,
            choices,
            default,
        } => {
            let default = (!default.is_empty()).then_some(default);
            let options = prompt_options(&question, default);
            let answer = prompts.checklist(&question.message, &choices, &options);
            finish("ask checklist", ctx, answer, |selected| {
                selected.iter().map(|&i| choices[i].clone()).collect()
            })
        }
        AskCommands::Dir { question, default } => {
            let options = prompt_options(&question, default);
            let answer = prompts.directory_select(&question.message, &options);
            finish("ask dir", ctx, answer, |path| vec![path.clone()])
        }
    };

    Ok(code)
}

fn prompt_options<D>(question: &QuestionArgs, default: Option<D>) -> PromptOptions<D> {
    PromptOptions {
        default,
        cli_flag: question.cli_flag.clone(),
        force_interactive: false,
    }
}

/// Print the outcome of a prompt and return the exit code
fn finish<T: Serialize>(
    command: &str,
    ctx: &RunContext,
    result: PromptResult<Answer<T>>,
    render: impl FnOnce(&T) -> Vec<String>,
) -> i32 {
    let answer = match result {
        Ok(answer) => answer,
        Err(e) => return report_error(command, ctx, AnswerData::<T> { value: None }, &e),
    };

    if ctx.json {
        let cancelled = answer.is_cancelled();
        let data = AnswerData::from(answer);
        if cancelled {
            JsonResponse::cancelled(command, data).print();
            return CANCELLED_EXIT_CODE;
        }
        JsonResponse::ok(command, data).print();
        return 0;
    }

    match answer {
        Answer::Confirmed(value) => {
            if !ctx.quiet {
                for line in render(&value) {
                    println!("{}", line);
                }
            }
            0
        }
        Answer::Cancelled => {
            eprintln!("{}", "cancelled".style(COLORS.warning));
            CANCELLED_EXIT_CODE
        }
    }
}
