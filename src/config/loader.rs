//! Settings file discovery and loading.

use crate::config::schema::BootstrapConfig;
use crate::error::{BootstrapError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file name, looked up in the project root.
pub const SETTINGS_FILE: &str = ".fo-bootstrap.yml";

/// Path of the settings file for a project root.
pub fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE)
}

/// Load settings for a project root.
///
/// A missing file yields the defaults.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid or names an empty
/// binary.
pub fn load_config(root: &Path) -> Result<BootstrapConfig> {
    let path = settings_path(root);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(BootstrapConfig::default());
        }
        Err(e) => return Err(BootstrapError::Io(e)),
    };

    parse_config(&content, &path)
}

/// Parse YAML content into BootstrapConfig.
///
/// An empty document is treated as all defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<BootstrapConfig> {
    if content.trim().is_empty() {
        return Ok(BootstrapConfig::default());
    }

    let config: BootstrapConfig =
        serde_yaml::from_str(content).map_err(|e| BootstrapError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    if config.binary.trim().is_empty() {
        return Err(BootstrapError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: "binary must not be empty".to_string(),
        });
    }

    Ok(config)
}
