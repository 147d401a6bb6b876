//! Integration tests for strq-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> merge -> validate.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use strq_config::{CONFIG_FILENAME, Config, ConfigError, ConfigWarning};
use strq_query::parse;

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a config file into the given directory and returns its path.
    fn create_config(&self, rel_dir: &str, content: &str) -> PathBuf {
        let path = self.create_dir(rel_dir).join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn nested_configs_merge() {
    let env = TestEnv::new();
    env.create_config(
        "",
        r#"
root = true

[separators]
or = " or "
and = " and "

[queries]
food = "spam or eggs"
rusty = "iron and oxide"
"#,
    );
    env.create_config(
        "project",
        r#"
[settings]
line_numbers = true

[queries]
rusty = "rust and (cargo or crate)"
"#,
    );
    let cwd = env.create_dir("project/src");

    let config = Config::load(&cwd).unwrap();
    assert_eq!(config.separators.or(), " or ");
    assert_eq!(config.separators.and(), " and ");
    assert!(config.settings.line_numbers);
    assert!(config.settings.ignore_blank);
    assert_eq!(config.config_root, Some(env.path().join("project")));

    let rusty = config.resolve_query("@rusty").unwrap();
    assert_eq!(rusty, "rust and (cargo or crate)");
    let query = parse(rusty, &config.separators).unwrap();
    assert!(query.matches("Rust uses Cargo"));
    assert!(!query.matches("rust alone"));

    assert!(config.validate().is_empty());
}

#[test]
fn invalid_named_query_is_a_warning() {
    let env = TestEnv::new();
    env.create_config("", "root = true\n[queries]\nbad = \"a(b, c)\"\n");

    let config = Config::load(env.path()).unwrap();
    let warnings = config.validate();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        &warnings[0],
        ConfigWarning::InvalidNamedQuery { name, .. } if name == "bad"
    ));
}

#[test]
fn reserved_separator_is_an_error() {
    let env = TestEnv::new();
    env.create_config("", "root = true\n[separators]\nand = \"}\"\n");

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSeparators { .. }));
    assert!(err.to_string().contains("illegal character"));
}

#[test]
fn malformed_toml_is_an_error() {
    let env = TestEnv::new();
    let path = env.create_config("", "root = true\n[settings\n");

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn load_from_no_files_is_default() {
    let config = Config::load_from_files(&[]).unwrap();
    assert_eq!(config.separators.or(), ",");
    assert_eq!(config.separators.and(), "&");
    assert!(config.queries.is_empty());
}
