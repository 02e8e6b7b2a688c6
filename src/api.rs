// API client module: the ride-data file handle, the score response and a
// small blocking HTTP client that posts the file to the scoring backend.
// The flow in `upload` only sees the `ScoreService` trait, so tests can
// swap the network out.

use crate::config::BackendUrl;
use crate::error::UploadError;
use log::debug;
use reqwest::blocking::{multipart, Client};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Multipart field name the scoring backend reads the file from.
pub const RIDE_DATA_FIELD: &str = "rideData";

/// A ride-data file chosen by the user. Owned by one upload attempt and
/// dropped once the attempt resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a file from disk, taking its name and guessing the MIME type
    /// from the extension.
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let bytes = std::fs::read(path).map_err(|source| UploadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("ride-data")
            .to_string();
        Ok(Self::new(name, mime_for(path), bytes))
    }
}

/// MIME type for the accepted ride-data extensions.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => "text/csv",
        Some("json") => "application/json",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Response of the scoring endpoint. Only `safetyScore` is read; any other
/// field the backend sends is ignored.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    #[serde(rename = "safetyScore")]
    pub safety_score: f64,
}

impl fmt::Display for ScoreResult {
    // f64's Display already drops a zero fraction: 87.0 prints as "87".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.safety_score)
    }
}

/// Something that can turn a ride-data file into a safety score.
#[cfg_attr(test, automock)]
pub trait ScoreService {
    /// Submit the file once. No retries.
    fn score(&self, file: SelectedFile) -> Result<ScoreResult, UploadError>;
}

/// Blocking reqwest client for the scoring backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    backend: BackendUrl,
}

impl ApiClient {
    /// Create an ApiClient. The backend URL is resolved on every request;
    /// see `config::BackendUrl`. The blocking client's default 30s total
    /// timeout is switched off: a slow scoring backend is waited for.
    pub fn new(backend: BackendUrl) -> Result<Self, UploadError> {
        let client = Client::builder().timeout(None).build()?;
        Ok(ApiClient { client, backend })
    }

    /// ApiClient that reads `SAFERIDE_BACKEND_URL` at request time.
    pub fn from_env() -> Result<Self, UploadError> {
        Self::new(BackendUrl::FromEnv)
    }
}

impl ScoreService for ApiClient {
    /// POST the file as multipart field `rideData` to `{base}/api/score`.
    /// Any non-2xx status is a `Server` error regardless of the code; a body
    /// without a numeric `safetyScore` is a `Parse` error.
    fn score(&self, file: SelectedFile) -> Result<ScoreResult, UploadError> {
        let url = self.backend.score_url();
        let SelectedFile { name, mime, bytes } = file;
        debug!("posting {} ({} bytes, {}) to {}", name, bytes.len(), mime, url);

        let part = multipart::Part::bytes(bytes)
            .file_name(name)
            .mime_str(&mime)?;
        let form = multipart::Form::new().part(RIDE_DATA_FIELD, part);

        let res = self.client.post(&url).multipart(form).send()?;
        let status = res.status();
        if !status.is_success() {
            return Err(UploadError::Server { status });
        }
        let body = res.text()?;
        let result: ScoreResult = serde_json::from_str(&body)?;
        debug!("scoring backend answered {} with score {}", status, result);
        Ok(result)
    }
}
