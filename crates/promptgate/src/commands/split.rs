//! Implementation of the `promptgate split` command

use promptgate_core::{input_with_timeout, separate_list_input};

use super::{RunContext, report_error};
use crate::output::{JsonResponse, SplitData};

/// Run the split command
///
/// Without `text`, one line is read from stdin within the configured timeout.
pub fn run_split(text: Option<String>, ctx: &RunContext) -> Result<i32, String> {
    let text = match text {
        Some(text) => text,
        None => match ctx
            .config
            .prompt
            .timeout()
            .and_then(|timeout| input_with_timeout(None, timeout))
        {
            Ok(line) => line,
            Err(e) => {
                return Ok(report_error("split", ctx, SplitData { tokens: vec![] }, &e));
            }
        },
    };

    let tokens = separate_list_input(&text);

    if ctx.json {
        JsonResponse::ok("split", SplitData { tokens }).print();
    } else if !ctx.quiet {
        for token in &tokens {
            println!("{}", token);
        }
    }

    Ok(0)
}
