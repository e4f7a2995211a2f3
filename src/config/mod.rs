//! Bootstrap settings.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use fo_bootstrap::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".fo-bootstrap.yml"), "binary: fo-dev").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.binary, "fo-dev");
//! assert_eq!(config.gui_flag, "--gui");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, settings_path, SETTINGS_FILE};
pub use schema::BootstrapConfig;
