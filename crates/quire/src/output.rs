//! Colored terminal output utilities.

use console::{Style, Term};

/// Color of a status line.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Plain,
    Success,
    Warning,
    Error,
    Highlight,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Error => Style::new().red(),
            Self::Highlight => Style::new().cyan().bold(),
        }
    }
}

/// Terminal output formatter.
///
/// Status lines go to stderr so that [`Output::data`] can be piped.
pub(crate) struct Output {
    status: Term,
    data: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            data: Term::stdout(),
        }
    }

    fn status_line(&self, tone: Tone, msg: &str) {
        let _ = self.status.write_line(&tone.style().apply_to(msg).to_string());
    }

    pub(crate) fn info(&self, msg: &str) {
        self.status_line(Tone::Plain, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.status_line(Tone::Success, msg);
    }

    /// Per-file summary of a conversion that produced fallout.
    pub(crate) fn warning(&self, msg: &str) {
        self.status_line(Tone::Warning, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.status_line(Tone::Error, msg);
    }

    /// Totals line after a command.
    pub(crate) fn highlight(&self, msg: &str) {
        self.status_line(Tone::Highlight, msg);
    }

    /// Write a line of command output to stdout, uncolored.
    pub(crate) fn data(&self, line: &str) {
        let _ = self.data.write_line(line);
    }
}
