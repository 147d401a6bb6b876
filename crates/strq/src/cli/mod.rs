//! CLI support for the `strq` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod output;

pub use context::CommandContext;

/// Exit status for usage, configuration, query, and I/O errors.
pub const EXIT_ERROR: u8 = 2;
