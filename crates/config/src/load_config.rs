// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use path_clean::clean;
use tracing::debug;

use crate::Thresholds;

/// File name searched for in the working directory and its parents.
pub const DEFAULT_CONFIG_NAME: &str = "ratpoly.config.yaml";

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = PathBuf::from(path);

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Picks the thresholds file: an explicit file wins, then the nearest
/// `ratpoly.config.yaml` above `cwd`. Returns `None` when neither exists.
pub fn resolve_config_path<P: Into<PathBuf>>(
    find_in_parent: FindInParent,
    cwd: P,
    default_filename: &str,
    explicit_file: Option<P>,
) -> Option<PathBuf> {
    let cwd = cwd.into();

    if let Some(file) = explicit_file.map(Into::into) {
        if file.is_absolute() {
            return Some(file);
        }
        return Some(clean(cwd.join(file)));
    }

    find_in_parent(&cwd, default_filename)
}

/// Loads thresholds from the resolved YAML file (if any) with environment overrides.
pub fn load_thresholds(cwd: &Path, explicit_file: Option<PathBuf>) -> Result<Thresholds> {
    let Some(path) = resolve_config_path(
        find_in_parent,
        cwd.to_path_buf(),
        DEFAULT_CONFIG_NAME,
        explicit_file,
    ) else {
        debug!("No thresholds file found, using defaults and environment");
        return Thresholds::from_env();
    };

    debug!("Loading thresholds from {}", path.display());
    let yaml = fs::read_to_string(&path)
        .with_context(|| format!("Could not read thresholds file {}", path.display()))?;
    Thresholds::from_yaml_str(&yaml)
        .with_context(|| format!("Invalid thresholds file {}", path.display()))
}
