//! Bootstrap state and the actions it implies.

use serde::Serialize;

use super::InstallLayout;

/// Facts observed on disk at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BootstrapState {
    /// The release executable exists.
    pub executable_present: bool,
    /// The persisted config file exists.
    pub config_present: bool,
}

/// Initial state of the setup state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupState {
    /// No executable yet.
    NeedsBuild,
    /// Executable present, config absent.
    NeedsConfig,
    /// Both present.
    Ready,
}

/// One step of a setup run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupAction {
    /// Build the release executable.
    Build,
    /// Collect the storage path and write the first config.
    Configure,
    /// Start the application in GUI mode.
    Launch,
}

impl BootstrapState {
    /// Observe the filesystem. Nothing is cached between runs.
    pub fn observe(layout: &InstallLayout) -> Self {
        Self {
            executable_present: layout.binary().is_file(),
            config_present: layout.config_file().is_file(),
        }
    }

    /// State the run starts in.
    pub fn initial(&self) -> SetupState {
        match (self.executable_present, self.config_present) {
            (false, _) => SetupState::NeedsBuild,
            (true, false) => SetupState::NeedsConfig,
            (true, true) => SetupState::Ready,
        }
    }

    /// Ordered actions for this run. Launch is always last.
    pub fn plan(&self) -> Vec<SetupAction> {
        let mut actions = Vec::with_capacity(3);
        if !self.executable_present {
            actions.push(SetupAction::Build);
        }
        if !self.config_present {
            actions.push(SetupAction::Configure);
        }
        actions.push(SetupAction::Launch);
        actions
    }
}
