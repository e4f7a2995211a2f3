//! Interactive prompts.

use std::io;

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::error::{BootstrapError, Result};

use super::{Prompt, PromptResult, PromptType};

/// Convert dialoguer errors to BootstrapError.
///
/// A read cut short by Ctrl-C surfaces as `ErrorKind::Interrupted`.
fn map_dialoguer_err(e: dialoguer::Error) -> BootstrapError {
    map_io_err(e.into())
}

fn map_io_err(e: io::Error) -> BootstrapError {
    if e.kind() == io::ErrorKind::Interrupted {
        BootstrapError::Interrupted
    } else {
        BootstrapError::Io(e)
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Acknowledge => prompt_acknowledge(prompt, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt
        .default
        .as_deref()
        .map(super::parse_yes)
        .unwrap_or(false);

    let result = Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    // Empty answers are allowed through; the caller decides what they mean.
    let theme = prompt_theme();
    let input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true);

    let result: String = if let Some(default) = &prompt.default {
        input
            .default(default.clone())
            .interact_text_on(term)
            .map_err(map_dialoguer_err)?
    } else {
        input.interact_text_on(term).map_err(map_dialoguer_err)?
    };

    Ok(PromptResult::String(result))
}

fn prompt_acknowledge(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    term.write_str(&prompt.question).map_err(map_io_err)?;
    term.read_line().map_err(map_io_err)?;
    Ok(PromptResult::Bool(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_read_maps_to_interrupted() {
        let err = map_io_err(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c"));
        assert!(matches!(err, BootstrapError::Interrupted));
    }

    #[test]
    fn other_read_errors_stay_io() {
        let err = map_io_err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(err, BootstrapError::Io(_)));
    }
}
