//! Implementation of the `promptgate notify` command

use super::{RunContext, report_error};
use crate::output::JsonResponse;

/// Run the notify command
///
/// A plain message never waits; `prominent` frames and wraps it and waits for
/// Enter when a terminal is attached.
pub fn run_notify(message: String, prominent: bool, ctx: &RunContext) -> Result<i32, String> {
    let result = ctx.display().and_then(|display| {
        let prompts = ctx.prompts(&display);
        if prominent {
            prompts.notification(&message)
        } else {
            prompts.notify(&message)
        }
    });

    match result {
        Ok(()) => {
            if ctx.json {
                JsonResponse::ok("notify", ()).print();
            }
            Ok(0)
        }
        Err(e) => Ok(report_error("notify", ctx, (), &e)),
    }
}
