//! fo-bootstrap - Dependency verification and first-run setup for
//! File Orchestrator.
//!
//! Two entry points share this crate: `check` probes the host for the
//! tools and resources the build needs, and `start` builds the release
//! executable when missing, collects the storage folder on first run,
//! writes it into `config.toml`, and launches the GUI.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.fo-bootstrap.yml` settings
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Dependency probes and the verification report
//! - [`setup`] - Setup state machine and launch
//! - [`shell`] - Subprocess execution and signal handling
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use fo_bootstrap::setup::set_storage_path;
//! use std::path::Path;
//!
//! let config = "[source]\npath = \"D:/MainStorage\"\n";
//! let updated = set_storage_path(config, Path::new("/home/u/store")).unwrap();
//! assert!(updated.contains("path = \"/home/u/store\""));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod setup;
pub mod shell;
pub mod ui;

pub use error::{BootstrapError, Result};
