//! Configuration system for strq.
//!
//! strq uses TOML configuration files named `.strq.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.strq.toml` files
//! found, then loading `~/.strq.toml` as the global config with lowest precedence.
//!
//! ```toml
//! [separators]
//! or = ","
//! and = "&"
//!
//! [settings]
//! ignore_blank = true
//! line_numbers = false
//!
//! [queries]
//! rusty = "rust &(cargo, crate)"
//! ```

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod validate;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
use log::debug;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawSeparators, RawSettings, parse_config_file, parse_config_str};
use serde::{Deserialize, Serialize};
use strq_query::Separators;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Prefix marking a reference to a named query.
pub const NAMED_QUERY_PREFIX: char = '@';

/// Top-level merged configuration for strq.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Validated separators.
    pub separators: Separators,
    /// General settings.
    pub settings: Settings,
    /// Named queries: name -> query string.
    pub queries: BTreeMap<String, String>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.strq.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            debug!("no config files, using defaults");
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Expands a `@name` reference to the configured query string.
    ///
    /// Any other input is returned unchanged.
    pub fn resolve_query<'a>(&'a self, input: &'a str) -> Result<&'a str, ConfigError> {
        let Some(name) = input.trim().strip_prefix(NAMED_QUERY_PREFIX) else {
            return Ok(input);
        };

        self.queries
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::UnknownQuery {
                name: name.to_string(),
            })
    }

    /// Serializes the effective configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableConfig {
            separators: SerializableSeparators {
                or: self.separators.or().to_string(),
                and: self.separators.and().to_string(),
            },
            settings: self.settings.clone(),
            queries: self.queries.clone(),
        };
        toml::to_string_pretty(&serializable).map_err(|source| ConfigError::SerializeToml { source })
    }
}

/// General settings for strq.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Skip blank lines when filtering input.
    pub ignore_blank: bool,
    /// Prefix output lines with their line number.
    pub line_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignore_blank: true,
            line_numbers: false,
        }
    }
}

/// Effective configuration in `.strq.toml` layout.
#[derive(Serialize)]
struct SerializableConfig {
    /// Separator section.
    separators: SerializableSeparators,
    /// General settings section.
    settings: Settings,
    /// Named queries section.
    queries: BTreeMap<String, String>,
}

/// Separator section for serialization.
#[derive(Serialize)]
struct SerializableSeparators {
    /// OR separator.
    or: String,
    /// AND separator.
    and: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_query(name: &str, query: &str) -> Config {
        let mut config = Config::default();
        config.queries.insert(name.to_string(), query.to_string());
        config
    }

    #[test]
    fn resolve_plain_query() {
        let config = Config::default();
        assert_eq!(config.resolve_query("a & b").unwrap(), "a & b");
    }

    #[test]
    fn resolve_named_query() {
        let config = config_with_query("food", "spam, eggs");
        assert_eq!(config.resolve_query("@food").unwrap(), "spam, eggs");
        assert_eq!(config.resolve_query("  @food ").unwrap(), "spam, eggs");
    }

    #[test]
    fn resolve_unknown_query() {
        let config = Config::default();
        let err = config.resolve_query("@nope").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownQuery { ref name } if name == "nope"));
        assert_eq!(err.to_string(), "unknown named query: @nope");
    }

    #[test]
    fn to_toml_round_trips() {
        let config = config_with_query("food", "spam, eggs");
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[separators]"));
        assert!(toml.contains("[queries]"));

        let raw = parse_config_str(&toml, Path::new("out.toml")).unwrap();
        let seps = raw.separators.unwrap();
        assert_eq!(seps.or.as_deref(), Some(","));
        assert_eq!(seps.and.as_deref(), Some("&"));
        assert_eq!(
            raw.queries.unwrap().get("food").map(String::as_str),
            Some("spam, eggs")
        );
    }
}
