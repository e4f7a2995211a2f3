//! Rendering of the dependency report.

use crate::requirements::{Outcome, ProbeCategory, ProbeResult, VerificationReport};
use crate::ui::{StatusKind, UserInterface};

/// Command suggested once the report is clean.
pub const NEXT_STEP: &str = "fo-bootstrap start";

/// One status line for a probe result.
pub fn result_line(result: &ProbeResult) -> String {
    match &result.detail {
        Some(detail) => format!("{}: {}", result.name, detail),
        None => result.name.clone(),
    }
}

/// Print a single probe result, styled by outcome.
pub fn show_probe_result(ui: &mut dyn UserInterface, result: &ProbeResult) {
    let outcome = result.outcome();
    if outcome == Outcome::Pass && !ui.output_mode().shows_passing() {
        return;
    }

    let line = result_line(result);
    match outcome {
        Outcome::Pass => ui.success(&line),
        Outcome::Warning => ui.warning(&line),
        Outcome::Error => ui.error(&line),
        Outcome::Info => ui.message(&format!("{} {}", StatusKind::from(outcome).icon(), line)),
    }

    if outcome != Outcome::Pass {
        if let Some(remediation) = &result.remediation {
            ui.show_hint(remediation);
        }
    }
}

/// Print every result grouped under its category title.
pub fn render_report(ui: &mut dyn UserInterface, report: &VerificationReport) {
    ui.show_header("File Orchestrator - Dependency Check");

    let mut current: Option<ProbeCategory> = None;
    for result in report.results() {
        if current != Some(result.category) {
            current = Some(result.category);
            ui.message("");
            ui.message(result.category.title());
        }
        show_probe_result(ui, result);
    }

    render_summary(ui, report);
}

/// Print the verdict and, when nothing blocks, the next step.
pub fn render_summary(ui: &mut dyn UserInterface, report: &VerificationReport) {
    let errors = report.error_count();
    let warnings = report.warning_count();

    ui.message("");
    ui.message("Summary:");

    if errors == 0 && warnings == 0 {
        ui.success("All checks passed! You're ready to install.");
    } else if errors == 0 {
        ui.warning(&format!("{} warning(s) found", warnings));
        ui.success("All required dependencies are installed");
        ui.message("You can proceed, but some features may be limited.");
    } else {
        ui.error(&format!("{} error(s) found", errors));
        if warnings > 0 {
            ui.warning(&format!("{} warning(s) found", warnings));
        }
        ui.error("Please install required dependencies before proceeding.");
    }

    if report.is_ok() {
        ui.show_hint(&format!("Next step: {}", NEXT_STEP));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::Severity;
    use crate::ui::{MockUI, OutputMode};

    fn sample() -> VerificationReport {
        vec![
            ProbeResult::found(ProbeCategory::Required, "Rust Compiler")
                .with_detail("rustc 1.80.0"),
            ProbeResult::missing(ProbeCategory::Optional, "Git", Severity::Warning)
                .with_detail("NOT FOUND (OPTIONAL)")
                .with_remediation("Install: sudo apt install git"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn result_line_includes_detail() {
        let result = ProbeResult::found(ProbeCategory::DiskSpace, "Free space").with_detail("2048 MB");
        assert_eq!(result_line(&result), "Free space: 2048 MB");
    }

    #[test]
    fn report_groups_by_category() {
        let mut ui = MockUI::new();
        render_report(&mut ui, &sample());

        assert!(ui.has_message(ProbeCategory::Required.title()));
        assert!(ui.has_message(ProbeCategory::Optional.title()));
        assert!(ui.has_success("Rust Compiler: rustc 1.80.0"));
        assert!(ui.has_warning("Git: NOT FOUND (OPTIONAL)"));
        assert!(ui.has_hint("sudo apt install git"));
    }

    #[test]
    fn warnings_only_suggests_next_step() {
        let mut ui = MockUI::new();
        render_summary(&mut ui, &sample());

        assert!(ui.has_warning("1 warning(s) found"));
        assert!(ui.has_hint(NEXT_STEP));
    }

    #[test]
    fn errors_withhold_next_step() {
        let report: VerificationReport = vec![ProbeResult::missing(
            ProbeCategory::Required,
            "Cargo",
            Severity::Error,
        )]
        .into_iter()
        .collect();
        let mut ui = MockUI::new();
        render_summary(&mut ui, &report);

        assert!(ui.has_error("1 error(s) found"));
        assert!(!ui.has_hint(NEXT_STEP));
    }

    #[test]
    fn clean_report_passes() {
        let report: VerificationReport =
            vec![ProbeResult::found(ProbeCategory::Required, "Cargo")]
                .into_iter()
                .collect();
        let mut ui = MockUI::new();
        render_summary(&mut ui, &report);
        assert!(ui.has_success("All checks passed"));
    }

    #[test]
    fn info_results_use_plain_messages() {
        let mut ui = MockUI::new();
        let info = ProbeResult::missing(ProbeCategory::Toolchain, "Rustup", Severity::Info);
        show_probe_result(&mut ui, &info);
        assert!(ui.has_message("○ Rustup"));
    }

    #[test]
    fn passing_results_hidden_in_quiet_mode() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        show_probe_result(&mut ui, &ProbeResult::found(ProbeCategory::Required, "Cargo"));
        assert!(ui.successes().is_empty());
    }
}
