//! Where the target application lives on disk.

use std::path::{Path, PathBuf};

use crate::config::BootstrapConfig;

/// Resolved paths for one installation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: PathBuf,
    binary: PathBuf,
    config_file: PathBuf,
}

impl InstallLayout {
    /// Derive the layout from a root directory and settings.
    pub fn new(root: &Path, config: &BootstrapConfig) -> Self {
        let binary = root
            .join("target")
            .join("release")
            .join(executable_name(&config.binary));

        Self {
            root: root.to_path_buf(),
            binary,
            config_file: root.join(&config.config_file),
        }
    }

    /// Installation root; every subprocess runs here.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Release executable of the target application.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Persisted configuration file.
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }
}

/// Platform executable name (`fo` or `fo.exe`).
pub fn executable_name(binary: &str) -> String {
    format!("{}{}", binary, std::env::consts::EXE_SUFFIX)
}
