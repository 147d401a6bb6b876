//! Error types for strq configuration.

use std::io;
use std::path::PathBuf;

use strq_query::QueryError;
use thiserror::Error;
use toml::{de, ser};

/// Errors that can occur when loading or using configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// The effective separators are unusable.
    #[error("invalid separators in configuration: {source}")]
    InvalidSeparators {
        /// Validation failure from the query engine.
        source: QueryError,
    },

    /// A `@name` reference names no configured query.
    #[error("unknown named query: @{name}")]
    UnknownQuery {
        /// The name that was looked up.
        name: String,
    },

    /// Failed to serialize the effective configuration.
    #[error("failed to serialize configuration: {source}")]
    SerializeToml {
        /// Underlying TOML serialization error.
        source: ser::Error,
    },
}
