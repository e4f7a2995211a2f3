//! Scripted host for probe tests.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::shell::ToolOutcome;

use super::probe::HostEnv;

/// A host whose tools, command outputs, and filesystem facts are set up front.
///
/// Unscripted commands of an installed tool fail with exit code 1;
/// commands of a tool that is not installed are `Absent`.
#[derive(Debug, Default)]
pub struct FakeHost {
    tools: HashSet<String>,
    outputs: HashMap<String, ToolOutcome>,
    dirs: HashSet<PathBuf>,
    free_space_mb: Option<u64>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tools(mut self, tools: &[&str]) -> Self {
        self.tools.extend(tools.iter().map(|t| t.to_string()));
        self
    }

    pub fn with_output(mut self, command_line: &str, stdout: &str) -> Self {
        self.outputs.insert(
            command_line.to_string(),
            ToolOutcome::Succeeded {
                stdout: stdout.to_string(),
            },
        );
        self
    }

    pub fn with_failure(mut self, command_line: &str, code: Option<i32>) -> Self {
        self.outputs.insert(
            command_line.to_string(),
            ToolOutcome::Failed {
                code,
                stderr: String::new(),
            },
        );
        self
    }

    pub fn with_dir(mut self, dir: &str) -> Self {
        self.dirs.insert(PathBuf::from(dir));
        self
    }

    pub fn with_free_space(mut self, mb: u64) -> Self {
        self.free_space_mb = Some(mb);
        self
    }
}

impl HostEnv for FakeHost {
    fn find_tool(&self, name: &str) -> Option<PathBuf> {
        self.tools
            .contains(name)
            .then(|| PathBuf::from("/fake/bin").join(name))
    }

    fn run(&self, program: &str, args: &[&str]) -> ToolOutcome {
        if !self.tools.contains(program) {
            return ToolOutcome::Absent;
        }
        let key = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.outputs
            .get(&key)
            .cloned()
            .unwrap_or(ToolOutcome::Failed {
                code: Some(1),
                stderr: format!("unscripted: {}", key),
            })
    }

    fn free_space_mb(&self, _path: &Path) -> io::Result<u64> {
        self.free_space_mb
            .ok_or_else(|| io::Error::new(io::ErrorKind::PermissionDenied, "statvfs denied"))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}
