//! Error types for bootstrap operations.
//!
//! This module defines [`BootstrapError`], the error type used by the
//! setup orchestrator and CLI, and a [`Result`] alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal orchestrator conditions (build, config init, launch) are
//!   `BootstrapError` variants and terminate the run
//! - The dependency verifier never returns these; its failures become
//!   warnings inside the report
//! - Every error carries enough context for an actionable message, and
//!   [`BootstrapError::hint`] supplies the remediation where one exists

use std::path::PathBuf;
use thiserror::Error;

/// Exit status used when the user interrupts a run.
pub const EXIT_INTERRUPTED: u8 = 130;

/// Core error type for bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A settings file or the target app's config could not be parsed.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// An external tool could not be spawned because it is not installed.
    #[error("'{tool}' not found on PATH")]
    ToolNotFound { tool: String },

    /// The build tool reported failure.
    #[error("Build failed: `{command}` exited with code {code:?}")]
    BuildFailed { command: String, code: Option<i32> },

    /// The build tool reported success but the executable is still missing.
    #[error("Build finished but no executable was produced at {path}")]
    BinaryMissingAfterBuild { path: PathBuf },

    /// The target app's `init` subcommand failed.
    #[error("Failed to initialize configuration: {message}")]
    ConfigInitFailed { message: String },

    /// The target app could not be started at all.
    #[error("Failed to launch {path}: {message}")]
    LaunchFailed { path: PathBuf, message: String },

    /// A prompt could not be answered without a terminal.
    #[error("Cannot prompt for '{key}' in non-interactive mode (set {env_var})")]
    PromptUnavailable { key: String, env_var: String },

    /// The user cancelled the run.
    #[error("Cancelled by user")]
    Interrupted,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BootstrapError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Interrupted => EXIT_INTERRUPTED,
            _ => 1,
        }
    }

    /// Remediation shown under the error message, if there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::ToolNotFound { tool } if tool == "cargo" => Some(
                "Make sure Rust is installed: https://www.rust-lang.org/tools/install".to_string(),
            ),
            Self::ToolNotFound { tool } => Some(format!("Install '{}' and try again.", tool)),
            Self::BuildFailed { .. } | Self::BinaryMissingAfterBuild { .. } => {
                Some("Run `fo-bootstrap check` to verify build prerequisites.".to_string())
            }
            Self::ConfigInitFailed { .. } | Self::ConfigParseError { .. } => {
                Some("Delete the partial config file and run `fo-bootstrap start` again.".to_string())
            }
            Self::PromptUnavailable { env_var, .. } => {
                Some(format!("Run from a terminal or export {}.", env_var))
            }
            _ => None,
        }
    }
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
