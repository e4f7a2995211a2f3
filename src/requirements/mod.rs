//! Dependency verification.
//!
//! This module checks whether the tools and system resources needed to
//! build and run the target app are present, and classifies every gap as
//! an error (blocks installation) or a warning (degraded but usable).
//!
//! # Modules
//!
//! - [`checker`] - The [`Verifier`] that runs the probe battery
//! - [`platform`] - Per-OS library and removable-media probes
//! - [`probe`] - Host access ([`HostEnv`]) and PATH lookup
//! - [`registry`] - The fixed list of required and optional tools
//! - [`report`] - Aggregated [`VerificationReport`]
//! - [`status`] - Per-probe [`ProbeResult`] and severities

pub mod checker;
pub mod platform;
pub mod probe;
pub mod registry;
pub mod report;
pub mod status;

#[cfg(test)]
pub(crate) mod fake;

pub use checker::{classify_free_space, Verifier};
pub use platform::{current_platform, PlatformProbe};
pub use probe::{HostEnv, SystemHost};
pub use registry::Platform;
pub use report::{ReportSummary, VerificationReport};
pub use status::{Outcome, ProbeCategory, ProbeResult, Severity};
