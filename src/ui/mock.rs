//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use fo_bootstrap::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("storage_path", "/srv/fo");
//!
//! ui.message("Starting setup");
//! let answer = ui.prompt(&Prompt::input("storage_path", "Path")).unwrap();
//!
//! assert_eq!(answer.as_string(), "/srv/fo");
//! assert!(ui.has_message("Starting setup"));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{BootstrapError, Result};

use super::{parse_yes, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Scripted response that simulates Ctrl-C at a prompt.
pub const INTERRUPT: &str = "^C";

/// Mock UI implementation for testing.
///
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys asked multiple times.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific header was shown.
    pub fn has_header(&self, title: &str) -> bool {
        self.headers.iter().any(|h| h.contains(title))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    fn next_response(&mut self, prompt: &Prompt) -> Option<String> {
        if let Some(response) = self
            .prompt_queues
            .get_mut(&prompt.key)
            .and_then(VecDeque::pop_front)
        {
            return Some(response);
        }
        self.prompt_responses
            .get(&prompt.key)
            .cloned()
            .or_else(|| prompt.default.clone())
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        let response = self.next_response(prompt);
        if response.as_deref() == Some(INTERRUPT) {
            return Err(BootstrapError::Interrupted);
        }

        // Unscripted prompts get a type-appropriate empty answer.
        Ok(match prompt.prompt_type {
            PromptType::Confirm => {
                PromptResult::Bool(response.as_deref().map(parse_yes).unwrap_or(false))
            }
            PromptType::Acknowledge => PromptResult::Bool(true),
            PromptType::Input => PromptResult::String(response.unwrap_or_default()),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_output() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");
        ui.show_header("Title");
        ui.show_hint("try again");

        assert!(ui.has_message("hello"));
        assert!(ui.has_success("done"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broken"));
        assert!(ui.has_header("Title"));
        assert!(ui.has_hint("again"));
    }

    #[test]
    fn queued_responses_are_returned_in_order() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("storage_path", vec!["", "/a"]);
        let prompt = Prompt::input("storage_path", "Path");

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "/a");
        assert_eq!(ui.prompts_shown().len(), 2);
    }

    #[test]
    fn queue_falls_back_to_fixed_response() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("k", vec!["first"]);
        ui.set_prompt_response("k", "fixed");
        let prompt = Prompt::input("k", "?");

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "first");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "fixed");
    }

    #[test]
    fn confirm_parses_yes() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("create", "y");
        let result = ui.prompt(&Prompt::confirm("create", "?", false)).unwrap();
        assert_eq!(result, PromptResult::Bool(true));
    }

    #[test]
    fn confirm_uses_prompt_default() {
        let mut ui = MockUI::new();
        let result = ui.prompt(&Prompt::confirm("create", "?", true)).unwrap();
        assert_eq!(result, PromptResult::Bool(true));
    }

    #[test]
    fn interrupt_sentinel_returns_interrupted() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("storage_path", INTERRUPT);
        let err = ui.prompt(&Prompt::input("storage_path", "?")).unwrap_err();
        assert!(matches!(err, BootstrapError::Interrupted));
    }

    #[test]
    fn interactive_flag_is_configurable() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
