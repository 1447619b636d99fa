//! Terminal output for the CLI.
//!
//! Status lines go to stderr. Command results such as the `nav` JSON go to
//! stdout so they can be piped.

use std::fmt::Display;
use std::io;

use console::{Emoji, Style, Term};

/// Labels of [`Output::field`] lines are padded to this width.
const LABEL_WIDTH: usize = 8;

static CHECK: Emoji<'_, '_> = Emoji("✔ ", "");
static CROSS: Emoji<'_, '_> = Emoji("✘ ", "");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "warning: ");

pub(crate) struct Output {
    status: Term,
    data: Term,
    dim: Style,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            data: Term::stdout(),
            dim: Style::new().dim(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print a `label: value` line with the label dimmed and aligned.
    pub(crate) fn field(&self, label: &str, value: impl Display) {
        let label = self.dim.apply_to(pad_label(label));
        let _ = self.status.write_line(&format!("{label} {value}"));
    }

    pub(crate) fn success(&self, msg: &str) {
        let _ = self
            .status
            .write_line(&self.green.apply_to(format!("{CHECK}{msg}")).to_string());
    }

    pub(crate) fn warning(&self, msg: &str) {
        let _ = self
            .status
            .write_line(&self.yellow.apply_to(format!("{WARN}{msg}")).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        let _ = self
            .status
            .write_line(&self.red.apply_to(format!("{CROSS}{msg}")).to_string());
    }

    pub(crate) fn highlight(&self, msg: &str) {
        let _ = self
            .status
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }

    /// Write command output to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout is closed.
    pub(crate) fn data(&self, text: &str) -> io::Result<()> {
        self.data.write_line(text)
    }
}

fn pad_label(label: &str) -> String {
    format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH + 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_pad_label_aligns_values() {
        assert_eq!(pad_label("Source"), "Source:  ");
        assert_eq!(pad_label("Output"), "Output:  ");
        assert_eq!(pad_label("Host"), "Host:    ");
    }

    #[test]
    fn test_pad_label_longer_than_width() {
        assert_eq!(pad_label("Directory"), "Directory:");
    }
}
