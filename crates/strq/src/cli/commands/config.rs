//! Implementation of `strq config`.

use std::process::ExitCode;

use crate::cli::{EXIT_ERROR, context::CommandContext};

/// Shows effective configuration settings and any warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    match &config.config_root {
        Some(root) => println!("# config root: {}", root.display()),
        None => println!("# no config files found, using defaults"),
    }

    match config.to_toml() {
        Ok(toml) => print!("{toml}"),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    }

    for warning in config.validate() {
        eprintln!("warning: {warning}");
    }

    ExitCode::SUCCESS
}
