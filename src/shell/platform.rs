//! Process environment detection and signal handling.

use std::sync::atomic::{AtomicBool, Ordering};

use console::Term;

use crate::error::EXIT_INTERRUPTED;

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install a Ctrl-C handler that exits with status 130.
///
/// A Ctrl-C reaches both this process and any attached child (build,
/// `init`, the GUI), so the handler runs while `main` is blocked waiting
/// on the child. It restores the cursor a prompt may have hidden.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        INTERRUPTED.store(true, Ordering::SeqCst);
        let _ = Term::stderr().show_cursor();
        eprintln!("\n⚠ Cancelled by user");
        std::process::exit(i32::from(EXIT_INTERRUPTED));
    })
}

/// Whether a Ctrl-C has been received.
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}
