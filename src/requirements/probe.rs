//! Host environment access for dependency probes.
//!
//! Probes never touch the OS directly; they go through [`HostEnv`] so each
//! one can be exercised against a scripted host in tests. [`SystemHost`]
//! is the real implementation.
//!
//! # Example
//!
//! ```no_run
//! use fo_bootstrap::requirements::probe::{HostEnv, SystemHost};
//!
//! let host = SystemHost::new();
//! if let Some(cargo) = host.find_tool("cargo") {
//!     println!("cargo at {}", cargo.display());
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use sysinfo::Disks;

use crate::shell::{capture, ToolOutcome};

/// Everything the dependency probes need from the host.
pub trait HostEnv {
    /// Locate an executable on the search path.
    fn find_tool(&self, name: &str) -> Option<PathBuf>;

    /// Run a tool with captured output.
    fn run(&self, program: &str, args: &[&str]) -> ToolOutcome;

    /// Free space, in megabytes, on the volume holding `path`.
    fn free_space_mb(&self, path: &Path) -> io::Result<u64>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// The real host: PATH lookup, process spawning, and filesystem queries.
#[derive(Debug, Clone)]
pub struct SystemHost {
    path_entries: Vec<PathBuf>,
}

impl SystemHost {
    /// Create a host that searches the current `PATH`.
    pub fn new() -> Self {
        Self {
            path_entries: parse_system_path(),
        }
    }

    /// Create a host that searches the given directories.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostEnv for SystemHost {
    fn find_tool(&self, name: &str) -> Option<PathBuf> {
        resolve_tool_path(name, &self.path_entries)
    }

    fn run(&self, program: &str, args: &[&str]) -> ToolOutcome {
        match self.find_tool(program) {
            Some(resolved) => capture(&resolved.to_string_lossy(), args),
            None => ToolOutcome::Absent,
        }
    }

    fn free_space_mb(&self, path: &Path) -> io::Result<u64> {
        free_space_bytes(path).map(|bytes| bytes / (1024 * 1024))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(windows)]
const EXECUTABLE_SUFFIXES: &[&str] = &[".exe", ".cmd", ".bat", ""];

#[cfg(not(windows))]
const EXECUTABLE_SUFFIXES: &[&str] = &[""];

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for suffix in EXECUTABLE_SUFFIXES {
            let candidate = dir.join(format!("{}{}", tool, suffix));
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

fn free_space_bytes(path: &Path) -> io::Result<u64> {
    let path = strip_verbatim_prefix(path.canonicalize()?);
    let disks = Disks::new_with_refreshed_list();
    containing_volume_space(
        &path,
        disks
            .iter()
            .map(|disk| (disk.mount_point(), disk.available_space())),
    )
    .ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no mounted volume holds {}", path.display()),
        )
    })
}

/// Available bytes of the volume whose mount point is the longest prefix
/// of `path`.
fn containing_volume_space<'a>(
    path: &Path,
    volumes: impl IntoIterator<Item = (&'a Path, u64)>,
) -> Option<u64> {
    volumes
        .into_iter()
        .filter(|(mount, _)| path.starts_with(mount))
        .max_by_key(|(mount, _)| mount.components().count())
        .map(|(_, available)| available)
}

/// `canonicalize` yields `\\?\C:\...` on Windows, while mount points are
/// plain `C:\`.
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|p| p.strip_prefix(r"\\?\")) {
        if !rest.starts_with("UNC") {
            return PathBuf::from(rest);
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\necho fake 1.0.0\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    /// Create a non-executable file at a path.
    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_fake_binary(&dir_a.join("cargo"));
        create_fake_binary(&dir_b.join("cargo"));

        let result = resolve_tool_path("cargo", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_a.join("cargo")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        assert!(resolve_tool_path("cargo", &[dir]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_non_executable_file(&dir_a.join("rustc"));
        create_fake_binary(&dir_b.join("rustc"));

        let result = resolve_tool_path("rustc", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("rustc")));
    }

    #[cfg(unix)]
    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }

    #[cfg(unix)]
    #[test]
    fn system_host_runs_tools_from_its_path() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("rustc"));
        let host = SystemHost::with_path(vec![temp.path().to_path_buf()]);

        let outcome = host.run("rustc", &["--version"]);
        assert_eq!(outcome.first_line(), Some("fake 1.0.0"));
    }

    #[test]
    fn system_host_reports_absent_tool() {
        let temp = TempDir::new().unwrap();
        let host = SystemHost::with_path(vec![temp.path().to_path_buf()]);

        assert!(host.find_tool("rustc").is_none());
        assert_eq!(host.run("rustc", &["--version"]), ToolOutcome::Absent);
    }

    #[test]
    fn free_space_is_reported_for_existing_directory() {
        let temp = TempDir::new().unwrap();
        let host = SystemHost::new();
        assert!(host.free_space_mb(temp.path()).is_ok());
    }

    #[test]
    fn free_space_fails_for_missing_directory() {
        let host = SystemHost::new();
        assert!(host
            .free_space_mb(Path::new("/nonexistent/fo-bootstrap/volume"))
            .is_err());
    }

    #[test]
    fn free_space_uses_innermost_mount() {
        let volumes = [
            (Path::new("/"), 10),
            (Path::new("/home"), 20),
            (Path::new("/home/u/media"), 30),
        ];
        let space = containing_volume_space(Path::new("/home/u/fo"), volumes);
        assert_eq!(space, Some(20));
    }

    #[test]
    fn free_space_mount_match_is_per_component() {
        let volumes = [(Path::new("/"), 10), (Path::new("/home"), 20)];
        let space = containing_volume_space(Path::new("/homework"), volumes);
        assert_eq!(space, Some(10));
    }

    #[test]
    fn free_space_without_volume_is_none() {
        let volumes: [(&Path, u64); 0] = [];
        assert_eq!(containing_volume_space(Path::new("/data"), volumes), None);
    }

    #[test]
    fn verbatim_drive_prefix_is_stripped() {
        assert_eq!(
            strip_verbatim_prefix(PathBuf::from(r"\\?\C:\fo")),
            PathBuf::from(r"C:\fo")
        );
        assert_eq!(
            strip_verbatim_prefix(PathBuf::from("/home/u")),
            PathBuf::from("/home/u")
        );
    }

    #[test]
    fn is_dir_distinguishes_files_and_directories() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        let host = SystemHost::new();

        assert!(host.is_dir(temp.path()));
        assert!(!host.is_dir(&file));
    }
}
