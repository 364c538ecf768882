//! Implementation of the `promptgate read-line` command

use std::io;
use std::time::Duration;

use promptgate_core::{FdStream, LineReader, PromptResult, input_with_timeout};

use super::{RunContext, report_error};
use crate::output::{JsonResponse, LineData};

/// Run the read-line command
///
/// The prompt goes to stdout ahead of the answer, matching a shell `read -p`.
/// With `--json` it goes to stderr so stdout stays a single JSON document.
pub fn run_read_line(prompt: Option<String>, ctx: &RunContext) -> Result<i32, String> {
    let result = ctx
        .config
        .prompt
        .timeout()
        .and_then(|timeout| read_line(prompt.as_deref(), timeout, ctx.json));

    let line = match result {
        Ok(line) => line,
        Err(e) => return Ok(report_error("read-line", ctx, LineData { line: None }, &e)),
    };

    if ctx.json {
        JsonResponse::ok("read-line", LineData { line: Some(line) }).print();
    } else if !ctx.quiet {
        println!("{}", line);
    }

    Ok(0)
}

fn read_line(prompt: Option<&str>, timeout: Option<Duration>, json: bool) -> PromptResult<String> {
    if json {
        LineReader::new(FdStream::stdin(), io::stderr()).read_line(prompt, timeout)
    } else {
        input_with_timeout(prompt, timeout)
    }
}
