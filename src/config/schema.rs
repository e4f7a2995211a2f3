//! Bootstrap settings schema.
//!
//! Maps `.fo-bootstrap.yml`. Every field is optional; an absent file
//! yields [`BootstrapConfig::default`].

use serde::{Deserialize, Serialize};

/// Facts about the target application that the bootstrapper builds,
/// configures, and launches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Display name used in banners.
    pub app_name: String,

    /// Executable name under `target/release/` (without `.exe`).
    pub binary: String,

    /// Persisted configuration file name, relative to the root.
    pub config_file: String,

    /// Cargo features enabled for the release build.
    pub build_features: Vec<String>,

    /// Argument that starts the application in graphical mode.
    pub gui_flag: String,

    /// Subcommand that writes a default configuration file.
    pub init_subcommand: String,

    /// Example path shown in the storage prompt.
    pub storage_example: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            app_name: "File Orchestrator".to_string(),
            binary: "fo".to_string(),
            config_file: "config.toml".to_string(),
            build_features: vec!["gui".to_string()],
            gui_flag: "--gui".to_string(),
            init_subcommand: "init".to_string(),
            storage_example: default_storage_example().to_string(),
        }
    }
}

fn default_storage_example() -> &'static str {
    if cfg!(windows) {
        r"D:\Storage"
    } else {
        "~/Storage"
    }
}
