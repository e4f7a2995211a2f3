//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{BootstrapError, Result};

use super::{parse_yes, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Prefix for environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "FO_PROMPT_";

/// Environment variable consulted for a given prompt key.
pub fn prompt_env_var(key: &str) -> String {
    format!("{}{}", PROMPT_ENV_PREFIX, key.to_uppercase())
}

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `FO_PROMPT_<KEY>` variables, then from the
/// prompt default. A prompt with neither is an error rather than a hang.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        if prompt.prompt_type == PromptType::Acknowledge {
            return Ok(PromptResult::Bool(true));
        }

        let env_var = prompt_env_var(&prompt.key);
        let answer = self
            .env_overrides
            .get(&env_var)
            .or(prompt.default.as_ref())
            .cloned();

        let Some(answer) = answer else {
            return Err(BootstrapError::PromptUnavailable {
                key: prompt.key.clone(),
                env_var,
            });
        };

        tracing::debug!(key = %prompt.key, "answered prompt non-interactively");

        match prompt.prompt_type {
            PromptType::Confirm => Ok(PromptResult::Bool(parse_yes(&answer))),
            _ => Ok(PromptResult::String(answer)),
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  → {}", hint);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui_with(pairs: &[(&str, &str)]) -> NonInteractiveUI {
        let overrides = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        NonInteractiveUI::with_overrides(OutputMode::Silent, overrides)
    }

    #[test]
    fn env_var_name_is_uppercased() {
        assert_eq!(prompt_env_var("storage_path"), "FO_PROMPT_STORAGE_PATH");
    }

    #[test]
    fn input_uses_override() {
        let mut ui = ui_with(&[("FO_PROMPT_STORAGE_PATH", "/srv/store")]);
        let result = ui
            .prompt(&Prompt::input("storage_path", "Path"))
            .unwrap();
        assert_eq!(result, PromptResult::String("/srv/store".to_string()));
    }

    #[test]
    fn input_without_override_or_default_fails() {
        let mut ui = ui_with(&[]);
        let err = ui
            .prompt(&Prompt::input("storage_path", "Path"))
            .unwrap_err();
        match err {
            BootstrapError::PromptUnavailable { key, env_var } => {
                assert_eq!(key, "storage_path");
                assert_eq!(env_var, "FO_PROMPT_STORAGE_PATH");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn confirm_falls_back_to_default() {
        let mut ui = ui_with(&[]);
        let result = ui
            .prompt(&Prompt::confirm("create_storage_dir", "Create?", true))
            .unwrap();
        assert_eq!(result, PromptResult::Bool(true));
    }

    #[test]
    fn confirm_override_is_parsed() {
        let mut ui = ui_with(&[("FO_PROMPT_CREATE_STORAGE_DIR", "no")]);
        let result = ui
            .prompt(&Prompt::confirm("create_storage_dir", "Create?", true))
            .unwrap();
        assert_eq!(result, PromptResult::Bool(false));
    }

    #[test]
    fn acknowledge_never_blocks() {
        let mut ui = ui_with(&[]);
        let result = ui
            .prompt(&Prompt::acknowledge("launch", "Press Enter"))
            .unwrap();
        assert_eq!(result, PromptResult::Bool(true));
    }

    #[test]
    fn is_never_interactive() {
        assert!(!ui_with(&[]).is_interactive());
    }
}
