//! External command execution.
//!
//! Tools are spawned directly (no intermediate shell) so that "not
//! installed" can be told apart from "installed but failed".

use super::platform::interrupted;
use crate::error::{BootstrapError, Result};
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Outcome of running a tool and capturing its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The program could not be found.
    Absent,

    /// The program ran (or failed to start for another reason) and did not succeed.
    Failed {
        /// Exit code (None if killed by signal or never started).
        code: Option<i32>,
        /// Captured standard error, or the spawn error message.
        stderr: String,
    },

    /// The program exited with status 0.
    Succeeded {
        /// Captured standard output.
        stdout: String,
    },
}

impl ToolOutcome {
    /// First non-empty line of stdout, trimmed.
    pub fn first_line(&self) -> Option<&str> {
        match self {
            Self::Succeeded { stdout } => stdout
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty()),
            _ => None,
        }
    }
}

/// Result of a command whose stdio was handed to the user.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,
}

/// Run a tool with captured stdout/stderr and classify the outcome.
pub fn capture<S: AsRef<OsStr>>(program: &str, args: &[S]) -> ToolOutcome {
    tracing::debug!("Capturing `{}`", describe(program, args));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(output) if output.status.success() => ToolOutcome::Succeeded {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        },
        Ok(output) => ToolOutcome::Failed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        },
        Err(e) if e.kind() == ErrorKind::NotFound => ToolOutcome::Absent,
        Err(e) => ToolOutcome::Failed {
            code: None,
            stderr: e.to_string(),
        },
    }
}

/// Run a program attached to the user's terminal and wait for it.
///
/// Only a failure to spawn or a Ctrl-C during the wait is an error; a
/// non-zero exit is reported in the returned [`CommandResult`].
pub fn run_attached<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let start = Instant::now();
    tracing::debug!("Running `{}`", describe(program.as_os_str(), args));

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    let status = cmd.status().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            BootstrapError::ToolNotFound {
                tool: program.display().to_string(),
            }
        } else {
            BootstrapError::Io(e)
        }
    })?;

    if interrupted() {
        return Err(BootstrapError::Interrupted);
    }

    let result = CommandResult {
        exit_code: status.code(),
        duration: start.elapsed(),
        success: status.success(),
    };
    tracing::debug!(
        "`{}` finished with {:?} after {:?}",
        program.display(),
        result.exit_code,
        result.duration
    );
    Ok(result)
}

/// Render a program and its arguments as a single display string.
pub fn describe<P: AsRef<OsStr>, S: AsRef<OsStr>>(program: P, args: &[S]) -> String {
    std::iter::once(program.as_ref())
        .chain(args.iter().map(AsRef::as_ref))
        .map(|part| part.to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
