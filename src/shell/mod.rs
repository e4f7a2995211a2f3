//! External command execution and process environment.

pub mod command;
pub mod platform;

pub use command::{
    capture, describe, run_attached, CommandOptions, CommandResult, ToolOutcome,
};
pub use platform::{install_interrupt_handler, interrupted, is_ci};
