//! Configuration validation.
//!
//! Reports non-fatal problems with a loaded configuration.

use std::fmt;

use strq_query::parse;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A named query does not parse with the effective separators.
    InvalidNamedQuery {
        /// Name of the query.
        name: String,
        /// Parse error message.
        message: String,
    },
    /// A named query has a blank name.
    BlankQueryName,
    /// A named query is blank and would match every line.
    BlankNamedQuery {
        /// Name of the query.
        name: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNamedQuery { name, message } => {
                write!(f, "named query '{name}' does not parse: {message}")
            }
            Self::BlankQueryName => write!(f, "a named query has a blank name"),
            Self::BlankNamedQuery { name } => {
                write!(f, "named query '{name}' is blank and matches everything")
            }
        }
    }
}

/// Validates a configuration and returns all warnings found.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    for (name, query) in &config.queries {
        if name.trim().is_empty() {
            warnings.push(ConfigWarning::BlankQueryName);
            continue;
        }
        if query.trim().is_empty() {
            warnings.push(ConfigWarning::BlankNamedQuery { name: name.clone() });
            continue;
        }
        if let Err(e) = parse(query, &config.separators) {
            warnings.push(ConfigWarning::InvalidNamedQuery {
                name: name.clone(),
                message: e.kind.to_string(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(queries: &[(&str, &str)]) -> Config {
        Config {
            queries: queries
                .iter()
                .map(|(n, q)| ((*n).to_string(), (*q).to_string()))
                .collect(),
            ..Config::default()
        }
    }

    #[test]
    fn valid_queries_no_warnings() {
        let config = config_with(&[("food", "(spam, eggs) & ham"), ("one", "x")]);
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn invalid_query_warns() {
        let config = config_with(&[("bad", "x(y, z)")]);
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            &warnings[0],
            ConfigWarning::InvalidNamedQuery { name, .. } if name == "bad"
        ));
        assert!(warnings[0].to_string().contains("not preceded by a separator"));
    }

    #[test]
    fn blank_name_and_query_warn() {
        let config = config_with(&[(" ", "x"), ("empty", "  ")]);
        let warnings = validate_config(&config);
        assert!(warnings.contains(&ConfigWarning::BlankQueryName));
        assert!(warnings.contains(&ConfigWarning::BlankNamedQuery {
            name: "empty".into()
        }));
    }
}
