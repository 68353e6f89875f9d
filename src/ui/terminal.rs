//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::prompts::prompt_confirm;
use super::{
    render_summary_table, should_use_colors, NonInteractiveUI, OutputMode, ProgressSpinner,
    Prompt, SpinnerHandle, SummaryRow, UserInterface, VerifyTheme,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: VerifyTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            VerifyTheme::new()
        } else {
            VerifyTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_checks() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_checks() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_checks() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        Term::stderr()
            .write_line(&self.theme.format_error(msg))
            .ok();
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", self.theme.format_detail(msg)).ok();
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_checks() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_checks() {
            writeln!(self.term, "\n{}", self.theme.format_section(title)).ok();
        }
    }

    fn show_summary(&mut self, rows: &[SummaryRow], all_passed: bool) {
        if !self.mode.shows_status() {
            return;
        }

        let theme = &self.theme;
        let table = render_summary_table(rows, |status| status.styled(theme));
        writeln!(self.term, "\n{}", self.theme.format_section("Verification Summary:")).ok();
        writeln!(self.term, "{}", table).ok();

        let verdict = if all_passed {
            self.theme.format_success("All checks passed")
        } else {
            self.theme.format_error("Some checks failed")
        };
        writeln!(self.term, "\n{}", verdict).ok();
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        prompt_confirm(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Create the appropriate UI based on interactivity and the attached terminal.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
