//! Aggregated verification report.

use serde::Serialize;

use super::status::{Outcome, ProbeResult};

/// All probe results from one verification pass.
///
/// Counts are derived from the results, so the report is a plain fold
/// over whatever the probes returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    results: Vec<ProbeResult>,
}

impl VerificationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add more results to the report.
    pub fn extend(&mut self, results: impl IntoIterator<Item = ProbeResult>) {
        self.results.extend(results);
    }

    /// All results in probe order.
    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    /// Number of results that resolved to an error.
    pub fn error_count(&self) -> usize {
        self.count(Outcome::Error)
    }

    /// Number of results that resolved to a warning.
    pub fn warning_count(&self) -> usize {
        self.count(Outcome::Warning)
    }

    /// Whether the required dependencies are all present.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Process exit status: 0 when there are no errors, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_ok() {
            0
        } else {
            1
        }
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome() == outcome)
            .count()
    }
}

impl FromIterator<ProbeResult> for VerificationReport {
    fn from_iter<I: IntoIterator<Item = ProbeResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

/// JSON view with the derived counts included.
#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub error_count: usize,
    pub warning_count: usize,
    pub exit_code: u8,
    pub results: &'a [ProbeResult],
}

impl<'a> From<&'a VerificationReport> for ReportSummary<'a> {
    fn from(report: &'a VerificationReport) -> Self {
        Self {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            exit_code: report.exit_code(),
            results: report.results(),
        }
    }
}
