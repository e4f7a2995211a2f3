//! Setup orchestration.
//!
//! Observes the installation, then builds, configures, and launches as
//! needed. Build and init failures abort the run; the launched
//! application's own exit status never does.

use std::path::{Path, PathBuf};

use crate::config::BootstrapConfig;
use crate::error::{BootstrapError, Result};
use crate::ui::{Prompt, UserInterface};

use super::storage::{acquire_storage_path, StorageSelection};
use super::target_config::rewrite_config_file;
use super::{BootstrapState, InstallLayout, SetupAction, TargetApp};

/// Prompt key for the "press Enter" pause before launch.
pub const LAUNCH_KEY: &str = "launch_gui";

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupSummary {
    /// Actions performed, in order.
    pub actions: Vec<SetupAction>,
    /// Storage directory chosen during first-run configuration.
    pub storage: Option<PathBuf>,
    /// Exit code of the launched application.
    pub app_exit_code: Option<i32>,
}

/// Drives one setup run.
pub struct Orchestrator<'a> {
    ui: &'a mut dyn UserInterface,
    app: &'a mut dyn TargetApp,
    layout: &'a InstallLayout,
    settings: &'a BootstrapConfig,
    home: Option<PathBuf>,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator for one installation.
    pub fn new(
        ui: &'a mut dyn UserInterface,
        app: &'a mut dyn TargetApp,
        layout: &'a InstallLayout,
        settings: &'a BootstrapConfig,
    ) -> Self {
        Self {
            ui,
            app,
            layout,
            settings,
            home: dirs::home_dir(),
        }
    }

    /// Override the directory `~` expands to.
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    /// Run every action the current state calls for.
    pub fn run(&mut self) -> Result<SetupSummary> {
        self.ui
            .show_header(&format!("{} - GUI", self.settings.app_name));

        let state = BootstrapState::observe(self.layout);
        let plan = state.plan();
        tracing::info!(state = ?state.initial(), plan = ?plan, "setup state observed");

        let mut summary = SetupSummary {
            actions: Vec::with_capacity(plan.len()),
            storage: None,
            app_exit_code: None,
        };

        for action in plan {
            match action {
                SetupAction::Build => self.build()?,
                SetupAction::Configure => {
                    let selection = self.configure()?;
                    summary.storage = Some(selection.into_path());
                }
                SetupAction::Launch => {
                    if state.config_present {
                        self.ui.success("Configuration found");
                    }
                    summary.app_exit_code = self.launch()?;
                }
            }
            summary.actions.push(action);
        }

        Ok(summary)
    }

    fn build(&mut self) -> Result<()> {
        let command = self.app.build_command();
        self.ui.warning("Binary not found!");
        self.ui.message(&format!(
            "Building {} with GUI support...",
            self.settings.app_name
        ));

        let result = self.app.build(self.layout)?;
        if !result.success {
            return Err(BootstrapError::BuildFailed {
                command,
                code: result.exit_code,
            });
        }
        if !self.layout.binary().is_file() {
            return Err(BootstrapError::BinaryMissingAfterBuild {
                path: self.layout.binary().to_path_buf(),
            });
        }

        tracing::info!(duration = ?result.duration, "build finished");
        self.ui.success("Build successful!");
        Ok(())
    }

    fn configure(&mut self) -> Result<StorageSelection> {
        self.ui.warning("First time setup detected!");
        self.ui.message("Let's configure your storage folder...");

        let selection = acquire_storage_path(
            &mut *self.ui,
            self.home.as_deref(),
            &self.settings.storage_example,
            &self.settings.app_name,
        )?;

        self.initialize_config(selection.path())?;
        self.show_completion(selection.path())?;
        Ok(selection)
    }

    fn initialize_config(&mut self, storage: &Path) -> Result<()> {
        self.ui.message("Creating configuration file...");

        let result =
            self.app
                .init(self.layout)
                .map_err(|e| BootstrapError::ConfigInitFailed {
                    message: e.to_string(),
                })?;
        if !result.success {
            return Err(BootstrapError::ConfigInitFailed {
                message: format!(
                    "`{} {}` exited with code {:?}",
                    self.layout.binary().display(),
                    self.settings.init_subcommand,
                    result.exit_code
                ),
            });
        }

        let config_file = self.layout.config_file();
        if config_file.is_file() {
            rewrite_config_file(config_file, storage)?;
            self.ui.success("Configuration created!");
        } else {
            tracing::warn!(config = %config_file.display(), "init produced no config file");
            self.ui.warning(&format!(
                "{} was not created; storage path not saved",
                config_file.display()
            ));
        }
        Ok(())
    }

    fn show_completion(&mut self, storage: &Path) -> Result<()> {
        self.ui.success("Setup complete!");
        self.ui.message("");
        self.ui.message("Next steps:");
        self.ui.message("   1. GUI will open automatically");
        self.ui
            .message("   2. Go to 'Drive Manager' to register your USB drives");
        self.ui
            .message(&format!("   3. Add files to: {}", storage.display()));
        self.ui.message("   4. They will sync automatically!");
        self.ui.message("");

        self.ui
            .prompt(&Prompt::acknowledge(LAUNCH_KEY, "Press Enter to launch GUI..."))?;
        Ok(())
    }

    fn launch(&mut self) -> Result<Option<i32>> {
        self.ui.message(&format!(
            "Starting {} GUI...",
            self.settings.app_name
        ));

        let result = self
            .app
            .launch(self.layout)
            .map_err(|e| BootstrapError::LaunchFailed {
                path: self.layout.binary().to_path_buf(),
                message: e.to_string(),
            })?;

        if !result.success {
            tracing::warn!(code = ?result.exit_code, "application exited unsuccessfully");
            let status = match result.exit_code {
                Some(code) => format!("exited with code {}", code),
                None => "was terminated by a signal".to_string(),
            };
            self.ui
                .warning(&format!("{} {}", self.settings.app_name, status));
        }
        Ok(result.exit_code)
    }
}
