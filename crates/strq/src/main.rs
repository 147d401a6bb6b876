//! Command-line interface for the `strq` query tool.

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use strq::cli::{CommandContext, args::Cli, commands};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
