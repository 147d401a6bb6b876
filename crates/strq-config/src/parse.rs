//! Configuration file parsing.
//!
//! Parses individual `.strq.toml` files into `RawConfig` structures whose fields stay
//! optional until merging.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Separator section.
    pub separators: Option<RawSeparators>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Named queries: name -> query string.
    pub queries: Option<BTreeMap<String, String>>,
}

/// Raw separator settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSeparators {
    /// OR separator.
    pub or: Option<String>,
    /// AND separator.
    pub and: Option<String>,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Skip blank lines when filtering input.
    pub ignore_blank: Option<bool>,
    /// Prefix output lines with their line number.
    pub line_numbers: Option<bool>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
