// Toast notifications. A loading toast stays on screen until the next
// toast replaces it, mirroring how a dashboard swaps the "uploading"
// toast for the final result.

use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
    Info,
}

/// One notification: a title line and an optional description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn loading(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Loading,
            title: title.into(),
            description: None,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    /// Whether this toast ends a pending loading toast.
    pub fn is_terminal(&self) -> bool {
        self.kind != ToastKind::Loading
    }
}

/// Anything that can show toasts to the user.
pub trait Notifier {
    /// Show a toast. A non-loading toast replaces any loading toast still
    /// on screen.
    fn notify(&mut self, toast: Toast);
}

/// Renders toasts in the terminal: a spinner for loading toasts and a
/// coloured line for everything else.
#[derive(Default)]
pub struct TerminalNotifier {
    pending: Option<ProgressBar>,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn spinner(message: String) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message);
        // ticks from a background thread so it keeps moving while the
        // upload blocks the calling thread
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, toast: Toast) {
        if let Some(spinner) = self.pending.take() {
            spinner.finish_and_clear();
        }
        let title = match toast.kind {
            ToastKind::Loading => {
                self.pending = Some(Self::spinner(toast.title));
                return;
            }
            ToastKind::Success => format!("✔ {}", toast.title).green().bold(),
            ToastKind::Error => format!("✘ {}", toast.title).red().bold(),
            ToastKind::Info => format!("ℹ {}", toast.title).cyan().bold(),
        };
        println!("{}", title);
        if let Some(description) = toast.description {
            println!("  {}", description.dim());
        }
    }
}

impl Drop for TerminalNotifier {
    fn drop(&mut self) {
        if let Some(spinner) = self.pending.take() {
            spinner.finish_and_clear();
        }
    }
}

/// Keeps every toast in memory instead of drawing it. Useful for
/// non-interactive callers and tests.
#[derive(Default, Debug)]
pub struct RecordingNotifier {
    pub toasts: Vec<Toast>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts that ended a pending loading toast or stood on their own.
    pub fn terminal_toasts(&self) -> Vec<&Toast> {
        self.toasts.iter().filter(|t| t.is_terminal()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }
}
