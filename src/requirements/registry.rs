//! Tool definitions for the dependency check.
//!
//! The target app is a Rust project, so the required tools are the Rust
//! compiler and Cargo; git and rustup are recommended but optional.

/// Platform family, used for install hints and platform probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Install hint for the Rust toolchain.
    pub fn rust_install_hint(self) -> &'static str {
        match self {
            Platform::Windows => {
                "https://www.rust-lang.org/tools/install (download rustup-init.exe)"
            }
            Platform::MacOS | Platform::Linux => {
                "curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh"
            }
        }
    }

    /// Install hint for git.
    pub fn git_install_hint(self) -> &'static str {
        match self {
            Platform::Windows => "https://git-scm.com/download/win",
            Platform::MacOS => "xcode-select --install",
            Platform::Linux => "sudo apt install git",
        }
    }
}

/// A command-line tool the check looks for on PATH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequirement {
    /// Binary name (e.g., "cargo").
    pub binary: &'static str,
    /// Display name (e.g., "Cargo (Rust Package Manager)").
    pub label: &'static str,
    /// Absence is an error when true, a warning otherwise.
    pub required: bool,
    /// How to install the tool.
    pub install_hint: &'static str,
}

pub const RUSTC: &str = "rustc";
pub const CARGO: &str = "cargo";
pub const GIT: &str = "git";
pub const RUSTUP: &str = "rustup";

/// The fixed tool list, required tools first.
pub fn tool_requirements(platform: Platform) -> Vec<ToolRequirement> {
    let rust_hint = platform.rust_install_hint();
    vec![
        ToolRequirement {
            binary: RUSTC,
            label: "Rust Compiler",
            required: true,
            install_hint: rust_hint,
        },
        ToolRequirement {
            binary: CARGO,
            label: "Cargo (Rust Package Manager)",
            required: true,
            install_hint: rust_hint,
        },
        ToolRequirement {
            binary: GIT,
            label: "Git",
            required: false,
            install_hint: platform.git_install_hint(),
        },
        ToolRequirement {
            binary: RUSTUP,
            label: "Rustup (Rust Toolchain Manager)",
            required: false,
            install_hint: rust_hint,
        },
    ]
}
