//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use log::debug;
use strq_config::Config;
use strq_query::{Query, Separators, parse};

use super::{EXIT_ERROR, args::SeparatorArgs};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads configuration for the current directory.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { config })
    }

    /// Returns the configured separators with command-line overrides applied.
    pub fn separators(&self, args: &SeparatorArgs) -> Result<Separators, ExitCode> {
        if args.or_sep.is_none() && args.and_sep.is_none() {
            return Ok(self.config.separators.clone());
        }

        let or = args
            .or_sep
            .as_deref()
            .unwrap_or(self.config.separators.or());
        let and = args
            .and_sep
            .as_deref()
            .unwrap_or(self.config.separators.and());

        Separators::new(or, and).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_ERROR)
        })
    }

    /// Expands a `@name` reference and parses the query, reporting errors on stderr.
    pub fn parse_query(&self, input: &str, separators: &Separators) -> Result<Query, ExitCode> {
        let resolved = self.config.resolve_query(input).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_ERROR)
        })?;
        if resolved != input {
            debug!("{input} resolved to {resolved:?}");
        }

        parse(resolved, separators).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_ERROR)
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::from(EXIT_ERROR)
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::from(EXIT_ERROR)
    })
}
