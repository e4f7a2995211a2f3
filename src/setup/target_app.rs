//! The application being installed.

use std::path::Path;

use crate::config::BootstrapConfig;
use crate::error::Result;
use crate::shell::{describe, run_attached, CommandOptions, CommandResult};

use super::InstallLayout;

/// Operations the orchestrator performs on the target application.
///
/// Each call blocks until the child exits. `Err` means the process could
/// not be started; a non-zero exit comes back in [`CommandResult`].
pub trait TargetApp {
    /// Build the release executable.
    fn build(&mut self, layout: &InstallLayout) -> Result<CommandResult>;

    /// Have the application write its default config file.
    fn init(&mut self, layout: &InstallLayout) -> Result<CommandResult>;

    /// Run the application in GUI mode.
    fn launch(&mut self, layout: &InstallLayout) -> Result<CommandResult>;

    /// Human-readable build command line.
    fn build_command(&self) -> String;
}

/// Target application built with cargo.
#[derive(Debug, Clone)]
pub struct CargoTargetApp {
    features: Vec<String>,
    init_subcommand: String,
    gui_flag: String,
}

impl CargoTargetApp {
    /// Create from settings.
    pub fn new(config: &BootstrapConfig) -> Self {
        Self {
            features: config.build_features.clone(),
            init_subcommand: config.init_subcommand.clone(),
            gui_flag: config.gui_flag.clone(),
        }
    }

    fn build_args(&self) -> Vec<String> {
        let mut args = vec!["build".to_string()];
        if !self.features.is_empty() {
            args.push("--features".to_string());
            args.push(self.features.join(","));
        }
        args.push("--release".to_string());
        args
    }
}

fn in_root(layout: &InstallLayout) -> CommandOptions {
    CommandOptions {
        cwd: Some(layout.root().to_path_buf()),
    }
}

impl TargetApp for CargoTargetApp {
    fn build(&mut self, layout: &InstallLayout) -> Result<CommandResult> {
        run_attached(Path::new("cargo"), &self.build_args(), &in_root(layout))
    }

    fn init(&mut self, layout: &InstallLayout) -> Result<CommandResult> {
        run_attached(layout.binary(), &[&self.init_subcommand], &in_root(layout))
    }

    fn launch(&mut self, layout: &InstallLayout) -> Result<CommandResult> {
        run_attached(layout.binary(), &[&self.gui_flag], &in_root(layout))
    }

    fn build_command(&self) -> String {
        describe("cargo", &self.build_args())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_build_command_enables_gui_release() {
        let app = CargoTargetApp::new(&BootstrapConfig::default());
        assert_eq!(app.build_command(), "cargo build --features gui --release");
    }

    #[test]
    fn multiple_features_are_joined() {
        let config = BootstrapConfig {
            build_features: vec!["gui".into(), "usb".into()],
            ..Default::default()
        };
        let app = CargoTargetApp::new(&config);
        assert_eq!(app.build_command(), "cargo build --features gui,usb --release");
    }

    #[test]
    fn no_features_omits_flag() {
        let config = BootstrapConfig {
            build_features: Vec::new(),
            ..Default::default()
        };
        let app = CargoTargetApp::new(&config);
        assert_eq!(app.build_command(), "cargo build --release");
    }

    #[test]
    #[cfg(unix)]
    fn launch_of_missing_binary_is_spawn_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let layout = InstallLayout::new(temp.path(), &BootstrapConfig::default());
        let mut app = CargoTargetApp::new(&BootstrapConfig::default());
        assert!(app.launch(&layout).is_err());
    }
}
