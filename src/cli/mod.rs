//! Command-line interface for fo-bootstrap.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, StartArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
