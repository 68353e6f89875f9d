//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined confirmation answers.
//!
//! # Example
//!
//! ```
//! use nrf_verify::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.success("cmake");
//! ui.error("dtc not found");
//!
//! // Assert on captured interactions
//! assert!(ui.has_success("cmake"));
//! assert!(ui.has_error("dtc"));
//! ```

use std::collections::HashMap;

use crate::error::{Result, VerifyError};

use super::{OutputMode, Prompt, SpinnerHandle, SummaryRow, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    details: Vec<String>,
    headers: Vec<String>,
    sections: Vec<String>,
    spinners: Vec<String>,
    summaries: Vec<(Vec<SummaryRow>, bool)>,
    prompt_responses: HashMap<String, bool>,
    prompt_errors: HashMap<String, String>,
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

    /// Set the answer for a prompt key.
    ///
    /// Unconfigured prompts are answered with their default.
    pub fn set_prompt_response(&mut self, key: &str, response: bool) {
        self.prompt_responses.insert(key.to_string(), response);
    }

    /// Make a prompt key fail with `message`, as a broken terminal would.
    pub fn set_prompt_error(&mut self, key: &str, message: &str) {
        self.prompt_errors
            .insert(key.to_string(), message.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Output mode this mock was created with.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured section titles.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all captured summaries as (rows, all_passed).
    pub fn summaries(&self) -> &[(Vec<SummaryRow>, bool)] {
        &self.summaries
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

    /// Check if a specific detail was shown.
    pub fn has_detail(&self, msg: &str) -> bool {
        self.details.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
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

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn show_summary(&mut self, rows: &[SummaryRow], all_passed: bool) {
        self.summaries.push((rows.to_vec(), all_passed));
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        self.prompts_shown.push(prompt.key.clone());
        if let Some(message) = self.prompt_errors.get(&prompt.key) {
            return Err(VerifyError::Io(std::io::Error::other(message.clone())));
        }
        Ok(self
            .prompt_responses
            .get(&prompt.key)
            .copied()
            .unwrap_or(prompt.default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that records nothing.
#[derive(Debug, Default)]
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn finish(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::StatusKind;

    #[test]
    fn captures_messages_by_kind() {
        let mut ui = MockUI::new();
        ui.message("Checking library versions:");
        ui.success("cmake");
        ui.warning("Unexpected modem firmware version");
        ui.error("gperf not found");
        ui.detail("path: /usr/bin/cmake");

        assert!(ui.has_message("library versions"));
        assert!(ui.has_success("cmake"));
        assert!(ui.has_warning("Unexpected"));
        assert!(ui.has_error("gperf"));
        assert!(ui.has_detail("/usr/bin/cmake"));
    }

    #[test]
    fn confirm_uses_configured_response_then_default() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("flash_firmware", false);

        let configured = Prompt {
            key: "flash_firmware".to_string(),
            question: "Flash?".to_string(),
            default: true,
        };
        let unconfigured = Prompt {
            key: "other".to_string(),
            question: "Other?".to_string(),
            default: true,
        };

        assert!(!ui.confirm(&configured).unwrap());
        assert!(ui.confirm(&unconfigured).unwrap());
        assert_eq!(ui.prompts_shown(), ["flash_firmware", "other"]);
    }

    #[test]
    fn confirm_returns_configured_error() {
        let mut ui = MockUI::new();
        ui.set_prompt_error("flash_firmware", "not a terminal");
        let prompt = Prompt {
            key: "flash_firmware".to_string(),
            question: "Flash?".to_string(),
            default: true,
        };

        let err = ui.confirm(&prompt).unwrap_err();
        assert!(err.to_string().contains("not a terminal"));
    }

    #[test]
    fn captures_summary_rows() {
        let mut ui = MockUI::new();
        let rows = vec![SummaryRow {
            label: "Modem Firmware".to_string(),
            status: StatusKind::Failed,
        }];
        ui.show_summary(&rows, false);

        assert_eq!(ui.summaries().len(), 1);
        assert_eq!(ui.summaries()[0].0, rows);
        assert!(!ui.summaries()[0].1);
    }

    #[test]
    fn default_mock_is_not_interactive() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        assert!(!ui.is_interactive());
        assert_eq!(ui.mode(), OutputMode::Verbose);
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
