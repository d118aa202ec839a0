// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::GraphConfig;
use crate::errors::Result;

/// Load engine options from a TOML file.
///
/// A missing file is an error; callers that want "defaults if absent"
/// should use [`load_or_default`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<GraphConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let config = GraphConfig::from_toml_str(&contents)?;

    debug!(path = %path.display(), ?config, "loaded graph config");
    Ok(config)
}

/// Load engine options, falling back to defaults when the file does not
/// exist. Any other IO or parse error is still returned.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<GraphConfig> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no graph config found; using defaults");
        return Ok(GraphConfig::default());
    }
    load_from_path(path)
}

/// Default config location: `Depdag.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Depdag.toml")
}
