//! Start command: build if needed, configure on first run, launch.

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::error::Result;
use crate::setup::{CargoTargetApp, InstallLayout, Orchestrator};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The start command implementation.
pub struct StartCommand {
    root: PathBuf,
}

impl StartCommand {
    /// Create a new start command.
    ///
    /// `--non-interactive` is applied when the UI is chosen, not here.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl Command for StartCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_config(&self.root)?;
        let layout = InstallLayout::new(&self.root, &settings);
        let mut app = CargoTargetApp::new(&settings);

        tracing::debug!(
            root = %layout.root().display(),
            binary = %layout.binary().display(),
            "starting setup"
        );

        let summary = Orchestrator::new(ui, &mut app, &layout, &settings).run()?;

        tracing::info!(actions = ?summary.actions, exit = ?summary.app_exit_code, "setup finished");
        Ok(CommandResult::success())
    }
}
