//! The dependency verifier.
//!
//! Runs the fixed probe battery against a [`HostEnv`] and a
//! [`PlatformProbe`], returning a [`VerificationReport`]. Probes are
//! independent: every one runs regardless of what earlier ones found, and
//! a probe that cannot answer degrades to a warning instead of aborting.

use std::path::{Path, PathBuf};

use super::platform::PlatformProbe;
use super::probe::HostEnv;
use super::registry::{tool_requirements, ToolRequirement, CARGO, RUSTC, RUSTUP};
use super::report::VerificationReport;
use super::status::{ProbeCategory, ProbeResult, Severity};
use crate::shell::ToolOutcome;

/// Free space above this many megabytes passes.
pub const DISK_SPACE_OK_MB: u64 = 1000;

/// Free space below this many megabytes is an error.
pub const DISK_SPACE_MIN_MB: u64 = 500;

/// Runs every probe and folds the results into a report.
pub struct Verifier<'a> {
    host: &'a dyn HostEnv,
    platform: &'a dyn PlatformProbe,
    work_dir: PathBuf,
}

impl<'a> Verifier<'a> {
    /// Create a verifier that measures disk space at `work_dir`.
    pub fn new(host: &'a dyn HostEnv, platform: &'a dyn PlatformProbe, work_dir: &Path) -> Self {
        Self {
            host,
            platform,
            work_dir: work_dir.to_path_buf(),
        }
    }

    /// Run the full battery in display order.
    pub fn verify(&self) -> VerificationReport {
        let mut report = VerificationReport::new();

        for tool in tool_requirements(self.platform.platform()) {
            report.extend(std::iter::once(self.check_tool(&tool)));
        }

        if self.host.find_tool(RUSTC).is_some() {
            report.extend(self.check_toolchain());
        }

        report.extend(self.platform.check_system_libraries(self.host));
        report.extend(std::iter::once(self.check_disk_space()));
        report.extend(self.platform.check_removable_media(self.host));

        tracing::debug!(
            "Verification finished: {} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        );
        report
    }

    /// Look a tool up on PATH and read its version line.
    pub fn check_tool(&self, tool: &ToolRequirement) -> ProbeResult {
        let (category, severity) = if tool.required {
            (ProbeCategory::Required, Severity::Error)
        } else {
            (ProbeCategory::Optional, Severity::Warning)
        };

        if self.host.find_tool(tool.binary).is_none() {
            tracing::debug!("{} not found on PATH", tool.binary);
            let label = if tool.required {
                "NOT FOUND (REQUIRED)"
            } else {
                "NOT FOUND (OPTIONAL)"
            };
            return ProbeResult::missing(category, tool.label, severity)
                .with_detail(label)
                .with_remediation(format!("Install: {}", tool.install_hint));
        }

        ProbeResult::found(category, tool.label).with_optional_detail(self.version_of(tool.binary))
    }

    /// Toolchain components, checked only when the compiler is present.
    ///
    /// Cargo is required transitively, so its absence here is an error
    /// of its own. A missing rustup is informational.
    pub fn check_toolchain(&self) -> Vec<ProbeResult> {
        let category = ProbeCategory::Toolchain;
        let mut results = Vec::new();

        if self.host.find_tool(CARGO).is_some() {
            results.push(
                ProbeResult::found(category, "Cargo").with_optional_detail(self.version_of(CARGO)),
            );
        } else {
            results.push(
                ProbeResult::missing(category, "Cargo", Severity::Error).with_detail("NOT FOUND"),
            );
        }

        if self.host.find_tool(RUSTUP).is_none() {
            results.push(
                ProbeResult::missing(category, "Rustup", Severity::Info)
                    .with_detail("NOT FOUND (recommended for updates)"),
            );
            return results;
        }

        results.push(
            ProbeResult::found(category, "Rustup").with_optional_detail(self.version_of(RUSTUP)),
        );

        let active = match self.host.run(RUSTUP, &["show", "active-toolchain"]) {
            outcome @ ToolOutcome::Succeeded { .. } => {
                ProbeResult::found(category, "Active toolchain")
                    .with_optional_detail(outcome.first_line().map(str::to_string))
            }
            ToolOutcome::Failed { code, stderr } => {
                tracing::debug!("rustup show active-toolchain failed ({:?}): {}", code, stderr);
                ProbeResult::missing(category, "Active toolchain", Severity::Info)
                    .with_detail("could not determine the active toolchain")
                    .with_remediation("rustup default stable")
            }
            ToolOutcome::Absent => ProbeResult::missing(category, "Active toolchain", Severity::Info)
                .with_detail("rustup disappeared while probing"),
        };
        results.push(active);

        results
    }

    /// Free space on the volume holding the working directory.
    pub fn check_disk_space(&self) -> ProbeResult {
        match self.host.free_space_mb(&self.work_dir) {
            Ok(mb) => classify_free_space(mb),
            Err(e) => {
                tracing::debug!("free space query failed: {}", e);
                ProbeResult::indeterminate(ProbeCategory::DiskSpace, "Available space", e)
            }
        }
    }

    /// First line of `<binary> --version`; absence of a version is not a failure.
    fn version_of(&self, binary: &str) -> Option<String> {
        let outcome = self.host.run(binary, &["--version"]);
        tracing::debug!("{} --version: {:?}", binary, outcome);
        outcome.first_line().map(str::to_string)
    }
}

/// Map free megabytes onto pass / low / insufficient.
///
/// More than 1000 MB passes; 500 to 1000 MB inclusive is low (warning);
/// below 500 MB is insufficient (error).
pub fn classify_free_space(mb: u64) -> ProbeResult {
    let category = ProbeCategory::DiskSpace;
    let name = "Available space";
    let detail = format!("{} MB", mb);

    if mb > DISK_SPACE_OK_MB {
        ProbeResult::found(category, name).with_detail(detail)
    } else if mb >= DISK_SPACE_MIN_MB {
        ProbeResult::missing(category, name, Severity::Warning)
            .with_detail(format!("{} (low)", detail))
    } else {
        ProbeResult::missing(category, name, Severity::Error)
            .with_detail(format!("{} (insufficient)", detail))
            .with_remediation(format!(
                "Recommended: At least {} MB free",
                DISK_SPACE_MIN_MB
            ))
    }
}
