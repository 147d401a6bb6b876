//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`.

use std::{collections::BTreeMap, path::PathBuf};

use log::debug;
use strq_query::Separators;

use crate::{
    Config, ConfigError, Settings,
    parse::{RawConfig, RawSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings and each separator: first defined value wins
/// - Named queries: merged by name, first definition wins
///
/// Fails if the merged separators do not validate.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let separators = merge_separators(configs)?;
    let settings = merge_settings(configs);
    let queries = merge_queries(configs);
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(|p| p.to_path_buf());

    Ok(Config {
        separators,
        settings,
        queries,
        config_root,
    })
}

/// Picks the highest-precedence value of each separator and validates the pair.
fn merge_separators(configs: &[ParsedConfig]) -> Result<Separators, ConfigError> {
    let defaults = Separators::default();
    let mut or = defaults.or().to_string();
    let mut and = defaults.and().to_string();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref seps) = parsed.config.separators {
            if let Some(ref v) = seps.or {
                or = v.clone();
            }
            if let Some(ref v) = seps.and {
                and = v.clone();
            }
        }
    }

    debug!("effective separators: or={or:?} and={and:?}");
    Separators::new(or, and).map_err(|source| ConfigError::InvalidSeparators { source })
}

/// Merges general settings, taking first defined value for each field.
fn merge_settings(configs: &[ParsedConfig]) -> Settings {
    let mut result = Settings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref settings) = parsed.config.settings {
            apply_raw_settings(&mut result, settings);
        }
    }

    result
}

/// Applies raw settings to result, overwriting any present values.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings) {
    if let Some(v) = raw.ignore_blank {
        result.ignore_blank = v;
    }
    if let Some(v) = raw.line_numbers {
        result.line_numbers = v;
    }
}

/// Merges named queries by name; the highest-precedence definition wins.
fn merge_queries(configs: &[ParsedConfig]) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();

    for parsed in configs {
        if let Some(ref queries) = parsed.config.queries {
            for (name, query) in queries {
                result
                    .entry(name.clone())
                    .or_insert_with(|| query.clone());
            }
        }
    }

    result
}
