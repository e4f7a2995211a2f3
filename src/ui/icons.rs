//! Status vocabulary for report lines.
//!
//! `StatusKind` provides the canonical icons used for probe results.

use crate::requirements::Outcome;

/// Canonical status kinds used in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Dependency present.
    Success,
    /// Required dependency missing.
    Failed,
    /// Optional dependency missing or degraded condition.
    Warning,
    /// Context only.
    Info,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Info => "○",
        }
    }
}

impl From<Outcome> for StatusKind {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Pass => Self::Success,
            Outcome::Error => Self::Failed,
            Outcome::Warning => Self::Warning,
            Outcome::Info => Self::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
        assert_eq!(StatusKind::Info.icon(), "○");
    }

    #[test]
    fn outcome_maps_to_status() {
        assert_eq!(StatusKind::from(Outcome::Pass), StatusKind::Success);
        assert_eq!(StatusKind::from(Outcome::Error), StatusKind::Failed);
        assert_eq!(StatusKind::from(Outcome::Warning), StatusKind::Warning);
        assert_eq!(StatusKind::from(Outcome::Info), StatusKind::Info);
    }
}
