//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{Result, VerifyError};

use super::prompts::parse_confirmation;
use super::{render_summary_table, OutputMode, Prompt, SpinnerHandle, SummaryRow, UserInterface};

/// Prefix of environment variables that answer prompts without a terminal.
pub const PROMPT_ENV_PREFIX: &str = "NRF_VERIFY_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prints plain text without colors or spinners. Prompts are answered from
/// `NRF_VERIFY_PROMPT_<KEY>` environment variables, falling back to the
/// prompt's default.
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
    fn message(&mut self, msg: &str) {
        if self.mode.shows_checks() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_checks() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_checks() {
            println!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("  {}", msg);
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_checks() {
            println!("{}", title);
            println!("{}", "=".repeat(console::measure_text_width(title)));
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_checks() {
            println!("\n{}", title);
        }
    }

    fn show_summary(&mut self, rows: &[SummaryRow], all_passed: bool) {
        if !self.mode.shows_status() {
            return;
        }

        println!("\nVerification Summary:");
        println!(
            "{}",
            render_summary_table(rows, |status| status.bracketed().to_string())
        );

        if all_passed {
            println!("\n✓ All checks passed");
        } else {
            println!("\n✗ Some checks failed");
        }
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        match self.env_overrides.get(&env_key) {
            Some(value) => {
                parse_confirmation(value).ok_or_else(|| VerifyError::ConfigValidationError {
                    message: format!("{} must be yes or no, got '{}'", env_key, value),
                })
            }
            None => Ok(prompt.default),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_details() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish(&mut self) {}
}
