use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Severity of a status line; picks the colour of its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A step that changed something on disk.
    Action,
    Info,
    Warn,
}

impl StatusKind {
    fn style(self) -> Style {
        match self {
            StatusKind::Action => Style::new().green().bold(),
            StatusKind::Info => Style::new().cyan().bold(),
            StatusKind::Warn => Style::new().yellow().bold(),
        }
    }
}

/// Render one status line with the label right-aligned in a 12 column gutter.
pub fn format_status(kind: StatusKind, label: &str, message: &str) -> String {
    format!("{:>12} {message}", kind.style().apply_to(label))
}

fn print_status(kind: StatusKind, label: &str, message: &str) {
    let _ = writeln!(std::io::stderr(), "{}", format_status(kind, label, message));
}

/// `     Created my-app`, bold green.
pub fn status(label: &str, message: &str) {
    print_status(StatusKind::Action, label, message);
}

pub fn status_info(label: &str, message: &str) {
    print_status(StatusKind::Info, label, message);
}

pub fn status_warn(label: &str, message: &str) {
    print_status(StatusKind::Warn, label, message);
}

/// Create an animated spinner for a scaffolding step.
///
/// Hidden when stderr is not a terminal so scripted runs stay quiet.
pub fn spinner(message: &str) -> ProgressBar {
    if !console::Term::stderr().is_term() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
