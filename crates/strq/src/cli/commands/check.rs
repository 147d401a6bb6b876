//! Implementation of `strq check`.

use std::process::ExitCode;

use crate::cli::{args::CheckCommand, context::CommandContext};

/// Parses each query and reports the ones that fail.
pub fn run(ctx: &CommandContext, cmd: &CheckCommand) -> ExitCode {
    let separators = match ctx.separators(&cmd.separators) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let mut failed = 0;
    for input in &cmd.queries {
        match ctx.parse_query(input, &separators) {
            Ok(query) => println!("ok: {input} => {}", query.to_statement()),
            Err(_) => failed += 1,
        }
    }

    if failed > 0 {
        eprintln!("{failed} of {} queries invalid", cmd.queries.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
