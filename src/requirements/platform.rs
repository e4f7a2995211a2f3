//! Platform-specific probes.
//!
//! System library and removable-media checks differ per OS family. Each
//! family implements [`PlatformProbe`]; the verifier picks one at start-up
//! via [`current_platform`] instead of branching inside every probe.

use std::path::Path;

use super::probe::HostEnv;
use super::registry::Platform;
use super::status::{ProbeCategory, ProbeResult, Severity};
use crate::shell::ToolOutcome;

/// GUI libraries the target app links against on Linux (pkg-config names).
pub const GUI_LIBRARIES: &[&str] = &["x11", "xext", "xcursor", "xrandr", "xi"];

/// Font rendering library (pkg-config name).
pub const FONT_LIBRARY: &str = "fontconfig";

/// Group that grants access to removable devices on Linux.
pub const REMOVABLE_MEDIA_GROUP: &str = "plugdev";

const LINUX_DEVICE_DIR: &str = "/dev/disk/by-id";
const MACOS_MOUNT_DIR: &str = "/Volumes";

/// Per-platform probe contract.
pub trait PlatformProbe {
    /// The platform family this probe handles.
    fn platform(&self) -> Platform;

    /// Check the system libraries the target app's GUI needs.
    fn check_system_libraries(&self, host: &dyn HostEnv) -> Vec<ProbeResult>;

    /// Check that removable drives can be detected.
    fn check_removable_media(&self, host: &dyn HostEnv) -> Vec<ProbeResult>;

    /// List drive roots visible to the user, where the platform has them.
    fn enumerate_drives(&self, _host: &dyn HostEnv) -> Vec<String> {
        Vec::new()
    }
}

/// Select the probe for the platform this binary was built for.
pub fn current_platform() -> Box<dyn PlatformProbe> {
    match Platform::current() {
        Platform::Linux => Box::new(LinuxPlatform),
        Platform::MacOS => Box::new(MacPlatform),
        Platform::Windows => Box::new(WindowsPlatform),
    }
}

/// Linux: pkg-config library lookups, `/dev/disk/by-id`, plugdev membership.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxPlatform;

impl LinuxPlatform {
    fn library_status(host: &dyn HostEnv, lib: &str) -> LibraryStatus {
        match host.run("pkg-config", &["--exists", lib]) {
            ToolOutcome::Succeeded { .. } => LibraryStatus::Found,
            ToolOutcome::Failed { code: Some(_), .. } => LibraryStatus::Missing,
            ToolOutcome::Failed { code: None, stderr } => LibraryStatus::Unknown(stderr),
            ToolOutcome::Absent => LibraryStatus::Unknown("pkg-config disappeared".to_string()),
        }
    }
}

enum LibraryStatus {
    Found,
    Missing,
    Unknown(String),
}

impl PlatformProbe for LinuxPlatform {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn check_system_libraries(&self, host: &dyn HostEnv) -> Vec<ProbeResult> {
        let category = ProbeCategory::SystemLibraries;

        if host.find_tool("pkg-config").is_none() {
            return vec![ProbeResult::missing(category, "pkg-config", Severity::Warning)
                .with_detail("NOT FOUND (cannot verify libraries)")
                .with_remediation("sudo apt install pkg-config")];
        }

        let mut results = vec![ProbeResult::found(category, "pkg-config")];

        let mut missing = Vec::new();
        let mut found = Vec::new();
        let mut unknown = Vec::new();
        for lib in GUI_LIBRARIES {
            match Self::library_status(host, lib) {
                LibraryStatus::Found => found.push(format!("lib{}", lib)),
                LibraryStatus::Missing => missing.push(format!("lib{}", lib)),
                LibraryStatus::Unknown(reason) => {
                    tracing::debug!(lib, %reason, "library query failed");
                    unknown.push(format!("lib{}", lib));
                }
            }
        }
        tracing::debug!(?found, ?missing, ?unknown, "GUI library status");

        let gui = if !missing.is_empty() {
            let packages: Vec<_> = missing.iter().map(|lib| format!("{}-dev", lib)).collect();
            ProbeResult::missing(category, "GUI libraries", Severity::Error)
                .with_detail(format!("Missing: {}", missing.join(", ")))
                .with_remediation(format!("sudo apt install {}", packages.join(" ")))
        } else if !unknown.is_empty() {
            ProbeResult::indeterminate(category, "GUI libraries", unknown.join(", "))
        } else {
            ProbeResult::found(category, "GUI libraries").with_detail(found.join(", "))
        };
        results.push(gui);

        let font = match Self::library_status(host, FONT_LIBRARY) {
            LibraryStatus::Found => ProbeResult::found(category, FONT_LIBRARY),
            LibraryStatus::Missing => {
                ProbeResult::missing(category, FONT_LIBRARY, Severity::Error)
                    .with_remediation("sudo apt install libfontconfig1-dev")
            }
            LibraryStatus::Unknown(reason) => {
                ProbeResult::indeterminate(category, FONT_LIBRARY, reason)
            }
        };
        results.push(font);

        results
    }

    fn check_removable_media(&self, host: &dyn HostEnv) -> Vec<ProbeResult> {
        let category = ProbeCategory::RemovableMedia;

        let devices = if host.is_dir(Path::new(LINUX_DEVICE_DIR)) {
            ProbeResult::found(category, "USB device detection")
        } else {
            ProbeResult::missing(category, "USB device detection", Severity::Warning)
                .with_detail(format!("Cannot access {}", LINUX_DEVICE_DIR))
                .with_remediation("May need elevated permissions for drive detection")
        };

        let group_name = format!("'{}' group membership", REMOVABLE_MEDIA_GROUP);
        let group = match host.run("groups", &[]) {
            ToolOutcome::Succeeded { stdout } => {
                if stdout
                    .split_whitespace()
                    .any(|g| g == REMOVABLE_MEDIA_GROUP)
                {
                    ProbeResult::found(category, group_name)
                        .with_detail("can access USB devices")
                } else {
                    ProbeResult::missing(category, group_name, Severity::Warning)
                        .with_detail(format!("User not in '{}' group", REMOVABLE_MEDIA_GROUP))
                        .with_remediation(format!(
                            "sudo usermod -aG {} $USER (then log out and back in)",
                            REMOVABLE_MEDIA_GROUP
                        ))
                }
            }
            ToolOutcome::Failed { stderr, .. } => {
                ProbeResult::indeterminate(category, group_name, stderr)
            }
            ToolOutcome::Absent => {
                ProbeResult::indeterminate(category, group_name, "'groups' not found")
            }
        };

        vec![devices, group]
    }
}

/// macOS: GUI libraries ship with the OS; drives mount under `/Volumes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacPlatform;

impl PlatformProbe for MacPlatform {
    fn platform(&self) -> Platform {
        Platform::MacOS
    }

    fn check_system_libraries(&self, _host: &dyn HostEnv) -> Vec<ProbeResult> {
        vec![
            ProbeResult::found(ProbeCategory::SystemLibraries, "GUI libraries")
                .with_detail("macOS detected - GUI libraries built-in"),
        ]
    }

    fn check_removable_media(&self, host: &dyn HostEnv) -> Vec<ProbeResult> {
        let name = format!("USB mount point ({})", MACOS_MOUNT_DIR);
        let result = if host.is_dir(Path::new(MACOS_MOUNT_DIR)) {
            ProbeResult::found(ProbeCategory::RemovableMedia, name)
        } else {
            ProbeResult::missing(ProbeCategory::RemovableMedia, name, Severity::Error)
                .with_detail(format!("Cannot access {}", MACOS_MOUNT_DIR))
        };
        vec![result]
    }
}

/// Windows: GUI libraries ship with the OS; drives are lettered roots.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPlatform;

impl PlatformProbe for WindowsPlatform {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn check_system_libraries(&self, _host: &dyn HostEnv) -> Vec<ProbeResult> {
        vec![
            ProbeResult::found(ProbeCategory::SystemLibraries, "GUI libraries")
                .with_detail("Windows detected - GUI libraries built-in"),
        ]
    }

    fn check_removable_media(&self, host: &dyn HostEnv) -> Vec<ProbeResult> {
        let drives = self.enumerate_drives(host);
        let result = ProbeResult::found(ProbeCategory::RemovableMedia, "Windows drive detection");
        let result = if drives.is_empty() {
            result
        } else {
            result.with_detail(format!("Available drives: {}", drives.join(", ")))
        };
        vec![result]
    }

    fn enumerate_drives(&self, host: &dyn HostEnv) -> Vec<String> {
        ('A'..='Z')
            .filter(|letter| host.is_dir(Path::new(&format!("{}:\\", letter))))
            .map(|letter| format!("{}:", letter))
            .collect()
    }
}
