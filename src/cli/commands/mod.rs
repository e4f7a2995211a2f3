//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! dispatched via [`CommandDispatcher`].

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod start;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
