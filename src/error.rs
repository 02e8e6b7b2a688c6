// Failure kinds of a single upload attempt.
//
// A cancelled file dialog is not represented here: no selection means
// no attempt. Every variant below ends up as the same "Upload failed."
// toast; the variant only matters for the diagnostic log line.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    /// The selected file could not be read from disk.
    #[error("failed to read ride data file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network, DNS or connection failure, or the body could not be read.
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("server error: {status}")]
    Server { status: StatusCode },

    /// The response body was not JSON with a numeric `safetyScore`.
    #[error("malformed score response")]
    Parse(#[from] serde_json::Error),
}
