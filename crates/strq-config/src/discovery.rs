//! Locating `.strq.toml` files.
//!
//! Every ancestor of the working directory may hold a `.strq.toml`; the nearest one has the
//! final say. `~/.strq.toml` sits underneath all of them unless a nearer file opts out with
//! `root = true`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::debug;

use crate::parse::is_root_config;

/// File name strq looks for in each directory.
pub const CONFIG_FILENAME: &str = ".strq.toml";

/// Lists the config files that apply to `cwd`, nearest first.
///
/// The search checks `cwd` and then each of its ancestors. A file marked `root = true` ends
/// the search and also shuts out `~/.strq.toml`; otherwise the home file, when present, comes
/// last.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stops_walk = is_root_config(&candidate);
        debug!("found config {} (root: {stops_walk})", candidate.display());
        configs.push(candidate);
        if stops_walk {
            return configs;
        }
    }

    // The home directory may also be an ancestor of cwd.
    if let Some(global) = global_config_path().filter(|p| p.is_file() && !configs.contains(p)) {
        debug!("using global config {}", global.display());
        configs.push(global);
    }

    configs
}

/// Location of the per-user `~/.strq.toml`, if a home directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Whether `path` is the per-user config file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
