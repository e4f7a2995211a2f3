//! Probe result types.
//!
//! Each probe produces one or more [`ProbeResult`] values describing
//! whether a tool or resource is present and how much its absence matters.

use serde::Serialize;

/// How much the absence of a probed dependency matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Required: absence blocks the all-clear verdict.
    Error,
    /// Optional or degraded: absence is reported but never blocks.
    Warning,
    /// Shown for context only; never counted.
    Info,
}

/// Which section of the report a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeCategory {
    Required,
    Optional,
    Toolchain,
    SystemLibraries,
    DiskSpace,
    RemovableMedia,
    Settings,
}

impl ProbeCategory {
    /// Section title used in the console report.
    pub fn title(self) -> &'static str {
        match self {
            Self::Required => "Checking Required Dependencies...",
            Self::Optional => "Checking Optional Dependencies...",
            Self::Toolchain => "Checking Rust Toolchain...",
            Self::SystemLibraries => "Checking System Libraries...",
            Self::DiskSpace => "Checking Disk Space...",
            Self::RemovableMedia => "Checking USB Support...",
            Self::Settings => "Checking Bootstrap Settings...",
        }
    }
}

/// Resolved outcome of a single probe after applying its severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Info,
    Warning,
    Error,
}

/// The result of checking one dependency or resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// Report section.
    pub category: ProbeCategory,
    /// Display name (e.g., "Cargo (Rust Package Manager)").
    pub name: String,
    /// Whether the tool or resource was found.
    pub present: bool,
    /// Severity applied when `present` is false.
    pub severity_if_absent: Severity,
    /// Version string or other context.
    pub detail: Option<String>,
    /// How to fix an absence.
    pub remediation: Option<String>,
}

impl ProbeResult {
    /// A dependency that was found.
    pub fn found(category: ProbeCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            present: true,
            severity_if_absent: Severity::Error,
            detail: None,
            remediation: None,
        }
    }

    /// A dependency that was not found.
    pub fn missing(category: ProbeCategory, name: impl Into<String>, severity: Severity) -> Self {
        Self {
            category,
            name: name.into(),
            present: false,
            severity_if_absent: severity,
            detail: None,
            remediation: None,
        }
    }

    /// A probe that could not determine its answer.
    ///
    /// Inability to check is never a confirmed absence, so this is always
    /// a warning.
    pub fn indeterminate(
        category: ProbeCategory,
        name: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::missing(category, name, Severity::Warning)
            .with_detail(format!("Could not determine: {}", reason))
    }

    /// Attach a detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach a detail line if there is one.
    pub fn with_optional_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }

    /// Attach a remediation hint.
    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }

    /// Outcome after applying the severity.
    pub fn outcome(&self) -> Outcome {
        if self.present {
            return Outcome::Pass;
        }
        match self.severity_if_absent {
            Severity::Error => Outcome::Error,
            Severity::Warning => Outcome::Warning,
            Severity::Info => Outcome::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_result_passes_regardless_of_severity() {
        let result = ProbeResult::found(ProbeCategory::Required, "Rust Compiler");
        assert_eq!(result.outcome(), Outcome::Pass);
    }

    #[test]
    fn missing_required_is_error() {
        let result = ProbeResult::missing(ProbeCategory::Required, "Rust Compiler", Severity::Error);
        assert_eq!(result.outcome(), Outcome::Error);
    }

    #[test]
    fn missing_optional_is_warning() {
        let result = ProbeResult::missing(ProbeCategory::Optional, "Git", Severity::Warning);
        assert_eq!(result.outcome(), Outcome::Warning);
    }

    #[test]
    fn missing_info_is_info() {
        let result = ProbeResult::missing(ProbeCategory::Toolchain, "Rustup", Severity::Info);
        assert_eq!(result.outcome(), Outcome::Info);
    }

    #[test]
    fn indeterminate_is_warning_with_reason() {
        let result =
            ProbeResult::indeterminate(ProbeCategory::DiskSpace, "Available space", "EACCES");
        assert_eq!(result.outcome(), Outcome::Warning);
        assert_eq!(
            result.detail.as_deref(),
            Some("Could not determine: EACCES")
        );
    }

    #[test]
    fn builders_set_fields() {
        let result = ProbeResult::missing(ProbeCategory::Optional, "Git", Severity::Warning)
            .with_detail("not on PATH")
            .with_remediation("sudo apt install git");
        assert_eq!(result.detail.as_deref(), Some("not on PATH"));
        assert_eq!(result.remediation.as_deref(), Some("sudo apt install git"));
    }

    #[test]
    fn category_titles_are_distinct() {
        let titles = [
            ProbeCategory::Required,
            ProbeCategory::Optional,
            ProbeCategory::Toolchain,
            ProbeCategory::SystemLibraries,
            ProbeCategory::DiskSpace,
            ProbeCategory::RemovableMedia,
        ]
        .map(ProbeCategory::title);
        let unique: std::collections::HashSet<_> = titles.iter().collect();
        assert_eq!(unique.len(), titles.len());
    }
}
