//! Storage path acquisition.
//!
//! The loop only returns once the chosen path is an existing directory.
//! Bad answers re-prompt; with no human attached the first bad answer is
//! fatal instead, since the same scripted answer would come back forever.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};
use crate::ui::non_interactive::prompt_env_var;
use crate::ui::{Prompt, UserInterface};

/// Prompt key for the storage path.
pub const STORAGE_PATH_KEY: &str = "storage_path";

/// Prompt key for the create-directory confirmation.
pub const CREATE_DIR_KEY: &str = "create_storage_dir";

/// A storage directory that exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSelection {
    path: PathBuf,
}

impl StorageSelection {
    /// The accepted directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the selection.
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Expand a leading `~` to the home directory.
///
/// `~user` forms are left alone, as is everything when no home is known.
pub fn expand_home(input: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(input);
    };

    if input == "~" {
        return home.to_path_buf();
    }
    match input
        .strip_prefix("~/")
        .or_else(|| input.strip_prefix("~\\"))
    {
        Some(rest) => home.join(rest),
        None => PathBuf::from(input),
    }
}

/// Ask for the storage directory until an existing (or newly created)
/// directory is chosen.
pub fn acquire_storage_path(
    ui: &mut dyn UserInterface,
    home: Option<&Path>,
    example: &str,
    app_name: &str,
) -> Result<StorageSelection> {
    loop {
        ui.message("Enter the path to your main storage folder:");
        ui.message(&format!(
            "(This is where {} will watch for new files)",
            app_name
        ));
        ui.show_hint(&format!("Example: {}", example));

        let answer = ui
            .prompt(&Prompt::input(STORAGE_PATH_KEY, "Path"))?
            .as_string();
        let answer = answer.trim();

        if answer.is_empty() {
            ui.error("Path cannot be empty!");
            retry_or_fail(ui, STORAGE_PATH_KEY)?;
            continue;
        }

        let candidate = match std::path::absolute(expand_home(answer, home)) {
            Ok(path) => path,
            Err(e) => {
                ui.error(&format!("Invalid path: {}", e));
                retry_or_fail(ui, STORAGE_PATH_KEY)?;
                continue;
            }
        };
        tracing::debug!(path = %candidate.display(), "storage path candidate");

        if candidate.is_dir() {
            ui.success("Path exists!");
            return Ok(StorageSelection { path: candidate });
        }

        ui.warning(&format!("Directory doesn't exist: {}", candidate.display()));
        let create = ui
            .prompt(&Prompt::confirm(CREATE_DIR_KEY, "Create it now?", false))?
            .as_bool()
            .unwrap_or(false);

        if !create {
            retry_or_fail(ui, STORAGE_PATH_KEY)?;
            continue;
        }

        match fs::create_dir_all(&candidate) {
            Ok(()) => {
                ui.success("Directory created successfully!");
                return Ok(StorageSelection { path: candidate });
            }
            Err(e) => {
                tracing::warn!(path = %candidate.display(), error = %e, "mkdir failed");
                ui.error(&format!("Failed to create directory: {}", e));
                retry_or_fail(ui, STORAGE_PATH_KEY)?;
            }
        }
    }
}

fn retry_or_fail(ui: &mut dyn UserInterface, key: &str) -> Result<()> {
    if ui.is_interactive() {
        ui.message("");
        Ok(())
    } else {
        Err(BootstrapError::PromptUnavailable {
            key: key.to_string(),
            env_var: prompt_env_var(key),
        })
    }
}
