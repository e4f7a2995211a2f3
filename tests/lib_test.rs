//! Library integration tests.

use std::fs;
use std::time::Duration;

use fo_bootstrap::config::BootstrapConfig;
use fo_bootstrap::requirements::{classify_free_space, Outcome};
use fo_bootstrap::setup::{InstallLayout, Orchestrator, SetupAction, TargetApp};
use fo_bootstrap::shell::CommandResult;
use fo_bootstrap::ui::MockUI;
use fo_bootstrap::BootstrapError;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = BootstrapError::ToolNotFound {
        tool: "cargo".into(),
    };
    assert!(err.to_string().contains("cargo"));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(BootstrapError::Interrupted.exit_code(), 130);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> fo_bootstrap::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use fo_bootstrap::cli::{Cli, Commands};

    let cli = Cli::parse_from(["fo-bootstrap", "check", "--json"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn disk_space_boundaries_are_exact() {
    assert_eq!(classify_free_space(1001).outcome(), Outcome::Pass);
    assert_eq!(classify_free_space(1000).outcome(), Outcome::Warning);
    assert_eq!(classify_free_space(500).outcome(), Outcome::Warning);
    assert_eq!(classify_free_space(499).outcome(), Outcome::Error);
}

/// Target app whose build never produces a binary.
struct EmptyBuild {
    launched: bool,
}

impl TargetApp for EmptyBuild {
    fn build(&mut self, _layout: &InstallLayout) -> fo_bootstrap::Result<CommandResult> {
        Ok(CommandResult {
            exit_code: Some(0),
            duration: Duration::ZERO,
            success: true,
        })
    }

    fn init(&mut self, _layout: &InstallLayout) -> fo_bootstrap::Result<CommandResult> {
        unreachable!("init must not run after a failed build")
    }

    fn launch(&mut self, _layout: &InstallLayout) -> fo_bootstrap::Result<CommandResult> {
        self.launched = true;
        Ok(CommandResult {
            exit_code: Some(0),
            duration: Duration::ZERO,
            success: true,
        })
    }

    fn build_command(&self) -> String {
        "cargo build --release".to_string()
    }
}

#[test]
fn successful_build_without_binary_is_fatal() {
    let root = TempDir::new().unwrap();
    let settings = BootstrapConfig::default();
    let layout = InstallLayout::new(root.path(), &settings);
    let mut ui = MockUI::new();
    let mut app = EmptyBuild { launched: false };

    let err = Orchestrator::new(&mut ui, &mut app, &layout, &settings)
        .run()
        .unwrap_err();

    assert!(matches!(err, BootstrapError::BinaryMissingAfterBuild { .. }));
    assert!(!app.launched);
}

#[test]
fn ready_install_only_launches() {
    let root = TempDir::new().unwrap();
    let settings = BootstrapConfig::default();
    let layout = InstallLayout::new(root.path(), &settings);
    fs::create_dir_all(layout.binary().parent().unwrap()).unwrap();
    fs::write(layout.binary(), "").unwrap();
    fs::write(layout.config_file(), "[source]\npath = \"/data\"\n").unwrap();

    let mut ui = MockUI::new();
    let mut app = EmptyBuild { launched: false };
    let summary = Orchestrator::new(&mut ui, &mut app, &layout, &settings)
        .run()
        .unwrap();

    assert_eq!(summary.actions, vec![SetupAction::Launch]);
    assert!(app.launched);
}
