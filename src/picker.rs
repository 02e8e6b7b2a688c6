// File selection. The accepted extensions are a convenience filter for the
// picker only; the backend does its own validation.

use anyhow::Result;
use dialoguer::Input;
use std::path::{Path, PathBuf};

/// Extensions offered by the pickers.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["csv", "json", "txt"];

/// The file-selection slot behind the "Upload Ride Data" button. It is
/// cleared after every upload attempt so picking the same file again
/// counts as a new selection.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    value: Option<PathBuf>,
}

impl FileInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot holding `path`, as if the user had just picked it.
    pub fn with_selection(path: impl Into<PathBuf>) -> Self {
        Self {
            value: Some(path.into()),
        }
    }

    pub fn select(&mut self, path: impl Into<PathBuf>) {
        self.value = Some(path.into());
    }

    pub fn value(&self) -> Option<&Path> {
        self.value.as_deref()
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// Whether `path` has one of the accepted ride-data extensions.
pub fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| e.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(input: &str) -> PathBuf {
    if input == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    match (input.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}

/// Asks the user for a ride-data file. `None` means the user cancelled.
pub trait FilePicker {
    fn pick(&mut self) -> Result<Option<PathBuf>>;
}

/// Native file dialog.
#[derive(Default)]
pub struct DialogPicker;

impl FilePicker for DialogPicker {
    fn pick(&mut self) -> Result<Option<PathBuf>> {
        let picked = rfd::FileDialog::new()
            .set_title("Upload Ride Data")
            .add_filter("Ride data", &ACCEPTED_EXTENSIONS)
            .pick_file();
        Ok(picked)
    }
}

/// Typed path prompt for terminals without a desktop session. An empty
/// answer cancels.
#[derive(Default)]
pub struct PromptPicker;

impl FilePicker for PromptPicker {
    fn pick(&mut self) -> Result<Option<PathBuf>> {
        let raw: String = Input::new()
            .with_prompt("Ride data file (.csv, .json, .txt; empty to cancel)")
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                let trimmed = input.trim();
                if trimmed.is_empty() || has_accepted_extension(Path::new(trimmed)) {
                    Ok(())
                } else {
                    Err(format!("expected one of: {}", ACCEPTED_EXTENSIONS.join(", ")))
                }
            })
            .interact_text()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(expand_tilde(trimmed)))
    }
}
