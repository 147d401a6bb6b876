//! Implementation of `strq explain`.

use std::process::ExitCode;

use crate::cli::{args::ExplainCommand, context::CommandContext};

/// Prints the statement form, the normalized query string, and the parsed tree.
pub fn run(ctx: &CommandContext, cmd: &ExplainCommand) -> ExitCode {
    let separators = match ctx.separators(&cmd.separators) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let query = match ctx.parse_query(&cmd.query, &separators) {
        Ok(q) => q,
        Err(code) => return code,
    };

    println!("Query:");
    println!("   {}", query.source());
    println!();
    println!("Statement:");
    println!("   {}", query.to_statement());
    println!();
    println!("Normalized:");
    println!("   {}", query.to_query_string(&separators));
    println!();
    println!("Tree:");
    for line in query.to_string().lines() {
        println!("   {line}");
    }

    ExitCode::SUCCESS
}
