// Upload-and-score flow behind the "Upload Ride Data" button.
//
// One file selection produces at most one request and exactly one final
// toast. Nothing here retries or cancels; a second upload is just another
// call.

use crate::api::{ScoreResult, ScoreService, SelectedFile};
use crate::error::UploadError;
use crate::notify::{Notifier, Toast};
use crate::picker::FileInput;
use log::{error, info};
use std::error::Error;
use std::path::Path;

pub const UPLOADING_TITLE: &str = "Uploading ride data file...";
pub const FAILED_TITLE: &str = "Upload failed.";
pub const FAILED_DESCRIPTION: &str = "Could not process your ride data file.";

/// How a file-selection event ended.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Nothing was selected; no request, no toast.
    Skipped,
    Scored(ScoreResult),
    Failed,
}

pub struct UploadClient<S> {
    service: S,
}

impl<S: ScoreService> UploadClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Handle a change of the file input: upload the selected file, show
    /// the result and clear the input so the same file can be picked again.
    pub fn on_file_change(
        &self,
        input: &mut FileInput,
        notifier: &mut dyn Notifier,
    ) -> UploadOutcome {
        let Some(path) = input.value().map(|p| p.to_path_buf()) else {
            return UploadOutcome::Skipped;
        };

        notifier.notify(Toast::loading(UPLOADING_TITLE));

        let outcome = match self.submit(&path) {
            Ok(result) => {
                info!("{} scored {}", path.display(), result);
                notifier.notify(Toast::success(
                    format!("Score calculated: {}", result),
                    format!("Your ride safety score is {}/100.", result),
                ));
                UploadOutcome::Scored(result)
            }
            Err(err) => {
                error!("Failed to upload file {}: {}", path.display(), error_chain(&err));
                notifier.notify(Toast::error(FAILED_TITLE, FAILED_DESCRIPTION));
                UploadOutcome::Failed
            }
        };

        input.clear();
        outcome
    }

    fn submit(&self, path: &Path) -> Result<ScoreResult, UploadError> {
        let file = SelectedFile::from_path(path)?;
        self.service.score(file)
    }
}

/// Error message including all causes, for the diagnostic log.
fn error_chain(err: &UploadError) -> String {
    let mut messages = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        messages.push(cause.to_string());
        source = cause.source();
    }
    messages.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockScoreService;
    use crate::notify::{RecordingNotifier, ToastKind};
    use mockall::predicate::eq;
    use reqwest::StatusCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ride_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn empty_selection_is_a_silent_no_op() {
        let mut service = MockScoreService::new();
        service.expect_score().never();
        let client = UploadClient::new(service);
        let mut notifier = RecordingNotifier::new();
        let mut input = FileInput::new();

        let outcome = client.on_file_change(&mut input, &mut notifier);

        assert_eq!(outcome, UploadOutcome::Skipped);
        assert!(notifier.toasts.is_empty());
    }

    #[test]
    fn success_shows_score_and_no_failure() {
        let file = ride_file("t,speed\n0,10\n");
        let mut service = MockScoreService::new();
        service
            .expect_score()
            .withf(|f| f.bytes == b"t,speed\n0,10\n" && f.mime == "text/csv")
            .times(1)
            .returning(|_| Ok(ScoreResult { safety_score: 87.0 }));
        let client = UploadClient::new(service);
        let mut notifier = RecordingNotifier::new();
        let mut input = FileInput::with_selection(file.path());

        let outcome = client.on_file_change(&mut input, &mut notifier);

        assert_eq!(outcome, UploadOutcome::Scored(ScoreResult { safety_score: 87.0 }));
        assert_eq!(notifier.toasts.len(), 2);
        assert_eq!(notifier.toasts[0], Toast::loading(UPLOADING_TITLE));
        assert_eq!(
            notifier.toasts[1],
            Toast::success("Score calculated: 87", "Your ride safety score is 87/100.")
        );
        assert!(notifier.toasts.iter().all(|t| t.kind != ToastKind::Error));
        assert!(input.is_empty());
    }

    #[test]
    fn server_error_shows_generic_failure() {
        let file = ride_file("x");
        let mut service = MockScoreService::new();
        service.expect_score().times(1).returning(|_| {
            Err(UploadError::Server {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
        });
        let client = UploadClient::new(service);
        let mut notifier = RecordingNotifier::new();
        let mut input = FileInput::with_selection(file.path());

        let outcome = client.on_file_change(&mut input, &mut notifier);

        assert_eq!(outcome, UploadOutcome::Failed);
        let terminal = notifier.terminal_toasts();
        assert_eq!(terminal.len(), 1);
        assert_eq!(*terminal[0], Toast::error(FAILED_TITLE, FAILED_DESCRIPTION));
        assert!(notifier.toasts.iter().all(|t| t.kind != ToastKind::Success));
        assert!(input.is_empty());
    }

    #[test]
    fn parse_error_shows_generic_failure() {
        let file = ride_file("x");
        let mut service = MockScoreService::new();
        service.expect_score().times(1).returning(|_| {
            let err = serde_json::from_str::<ScoreResult>("<html>").unwrap_err();
            Err(UploadError::Parse(err))
        });
        let client = UploadClient::new(service);
        let mut notifier = RecordingNotifier::new();
        let mut input = FileInput::with_selection(file.path());

        assert_eq!(client.on_file_change(&mut input, &mut notifier), UploadOutcome::Failed);
        assert_eq!(notifier.toasts.last().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn unreadable_file_fails_without_request() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();
        drop(file);

        let mut service = MockScoreService::new();
        service.expect_score().never();
        let client = UploadClient::new(service);
        let mut notifier = RecordingNotifier::new();
        let mut input = FileInput::with_selection(&path);

        assert_eq!(client.on_file_change(&mut input, &mut notifier), UploadOutcome::Failed);
        assert_eq!(notifier.toasts.last().unwrap().kind, ToastKind::Error);
        assert!(input.is_empty());
    }

    #[test]
    fn reselecting_same_file_sends_a_new_request() {
        let file = ride_file("same");
        let mut service = MockScoreService::new();
        service
            .expect_score()
            .with(eq(SelectedFile::from_path(file.path()).unwrap()))
            .times(2)
            .returning(|_| Ok(ScoreResult { safety_score: 50.0 }));
        let client = UploadClient::new(service);
        let mut notifier = RecordingNotifier::new();
        let mut input = FileInput::new();

        input.select(file.path());
        client.on_file_change(&mut input, &mut notifier);
        assert!(input.is_empty());

        input.select(file.path());
        client.on_file_change(&mut input, &mut notifier);

        assert_eq!(notifier.terminal_toasts().len(), 2);
    }

    #[test]
    fn error_chain_includes_source() {
        let err = UploadError::Read {
            path: "ride.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(error_chain(&err), "failed to read ride data file ride.csv | gone");
    }
}
