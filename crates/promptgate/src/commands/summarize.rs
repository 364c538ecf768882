//! Implementation of the `promptgate summarize` command

use promptgate_core::summarize_domain_list;

use super::RunContext;
use crate::output::{JsonResponse, SummaryData};

/// Run the summarize command
pub fn run_summarize(names: Vec<String>, ctx: &RunContext) -> Result<i32, String> {
    let summary = summarize_domain_list(&names);

    if ctx.json {
        let data = SummaryData {
            summary,
            count: names.len(),
        };
        JsonResponse::ok("summarize", data).print();
    } else if !ctx.quiet {
        println!("{}", summary);
    }

    Ok(0)
}
