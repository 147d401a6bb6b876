//! Clap argument definitions for the `strq` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "strq")]
#[command(about = "Filter text with boolean substring queries")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Separator overrides shared by every command that parses queries.
#[derive(Args, Debug, Clone, Default)]
pub struct SeparatorArgs {
    /// OR separator [default: from config, or ","]
    #[arg(long, value_name = "SEP")]
    pub or_sep: Option<String>,

    /// AND separator [default: from config, or "&"]
    #[arg(long, value_name = "SEP")]
    pub and_sep: Option<String>,
}

/// Arguments for `strq match`.
#[derive(Args, Debug, Clone)]
pub struct MatchCommand {
    /// Query string, or @name for a query defined in .strq.toml
    pub query: String,

    /// Files to read (standard input if none, or "-")
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    /// Separator overrides.
    pub separators: SeparatorArgs,

    /// Print lines that do NOT match
    #[arg(short = 'v', long)]
    pub invert: bool,

    /// Print only the number of matching lines
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Prefix each line with its line number
    #[arg(short = 'n', long)]
    pub line_number: bool,

    /// Consider blank lines too (overrides settings.ignore_blank)
    #[arg(long)]
    pub keep_blank: bool,

    /// Output in JSON format
    #[arg(long, conflicts_with = "count")]
    pub json: bool,
}

/// Arguments for `strq explain`.
#[derive(Args, Debug, Clone)]
pub struct ExplainCommand {
    /// Query string, or @name for a query defined in .strq.toml
    pub query: String,

    #[command(flatten)]
    /// Separator overrides.
    pub separators: SeparatorArgs,
}

/// Arguments for `strq check`.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    /// Queries to validate
    #[arg(required = true)]
    pub queries: Vec<String>,

    #[command(flatten)]
    /// Separator overrides.
    pub separators: SeparatorArgs,
}

/// Supported `strq` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print lines that match a query
    #[command(after_help = "\
QUERY SYNTAX:
  a & b             Both terms must appear
  a, b              Either term
  a, b & c          a, or both b and c (AND binds tighter)
  (a, b) & c        Bracket group, one level deep
  c &(a, b)         A group must follow its separator directly

Terms match as case-insensitive substrings. The characters { } [ ] are reserved.

EXIT STATUS:
  0 if a line was printed, 1 if none, 2 on error")]
    Match(MatchCommand),

    /// Show how a query is parsed
    Explain(ExplainCommand),

    /// Validate queries and report errors
    Check(CheckCommand),

    /// Show effective configuration
    Config,
}
