//! Dependency check command.
//!
//! `fo-bootstrap check` runs every probe, prints the grouped report (or
//! JSON), and exits 1 when any required dependency is missing.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::{load_config, SETTINGS_FILE};
use crate::error::Result;
use crate::requirements::{
    current_platform, HostEnv, PlatformProbe, ProbeCategory, ProbeResult, ReportSummary,
    Severity, SystemHost, VerificationReport, Verifier,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::render_report;

/// The check command implementation.
pub struct CheckCommand {
    root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(root: &Path, args: CheckArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            args,
        }
    }

    /// Run all probes against the given host and platform.
    pub fn build_report(
        &self,
        host: &dyn HostEnv,
        platform: &dyn PlatformProbe,
    ) -> VerificationReport {
        let mut report = Verifier::new(host, platform, &self.root).verify();
        if let Some(problem) = self.settings_problem() {
            report.extend([problem]);
        }
        report
    }

    /// A broken settings file is reported, not fatal, so the rest of the
    /// report is still shown.
    fn settings_problem(&self) -> Option<ProbeResult> {
        let err = load_config(&self.root).err()?;
        tracing::warn!(error = %err, "bootstrap settings unreadable");
        Some(
            ProbeResult::missing(ProbeCategory::Settings, SETTINGS_FILE, Severity::Warning)
                .with_detail(err.to_string())
                .with_remediation(format!("Fix or remove {}", SETTINGS_FILE)),
        )
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let host = SystemHost::new();
        let platform = current_platform();
        let report = self.build_report(&host, platform.as_ref());

        tracing::info!(
            errors = report.error_count(),
            warnings = report.warning_count(),
            "dependency check finished"
        );

        if self.args.json {
            let json = serde_json::to_string_pretty(&ReportSummary::from(&report))
                .map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            render_report(ui, &report);
        }

        Ok(if report.is_ok() {
            CommandResult::success()
        } else {
            CommandResult::failure(report.exit_code())
        })
    }
}
