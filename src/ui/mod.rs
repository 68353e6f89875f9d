//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use nrf_verify::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Silent);
//! ui.show_header("nRF Library Verification Tool");
//! ui.success("nrf_modem_lib: 2.4.0");
//! ```

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, VerifyTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a passed check.
    fn success(&mut self, msg: &str);

    /// Display a non-fatal warning.
    fn warning(&mut self, msg: &str);

    /// Display a failed check or error. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Display a detail line, shown in verbose mode only.
    fn detail(&mut self, msg: &str);

    /// Show the tool banner.
    fn show_header(&mut self, title: &str);

    /// Show the title of a group of checks.
    fn show_section(&mut self, title: &str);

    /// Show the pass/fail table and the overall verdict.
    fn show_summary(&mut self, rows: &[SummaryRow], all_passed: bool);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Start a spinner for a blocking operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop and clear the spinner.
    fn finish(&mut self);
}

/// A yes/no question.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key (used for environment overrides and test responses).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer used when the user just presses enter or no terminal is attached.
    pub default: bool,
}

/// One row of the verification summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Check label, e.g. "Build Dependencies".
    pub label: String,
    /// Outcome of the check.
    pub status: StatusKind,
}

/// Render summary rows as a table, using `cell` to format each status.
pub fn render_summary_table(rows: &[SummaryRow], cell: impl Fn(StatusKind) -> String) -> String {
    let mut table = Table::new(vec!["Check", "Result"]);
    for row in rows {
        table.add_row(vec![row.label.clone(), cell(row.status)]);
    }
    table.render()
}
