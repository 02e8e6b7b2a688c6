// Command-line arguments and top-level dispatch. Without a subcommand the
// interactive dashboard menu runs.

use crate::actions::{claim_rewards, connect_wallet};
use crate::api::{ApiClient, ScoreService};
use crate::config::BackendUrl;
use crate::notify::Notifier;
use crate::picker::{DialogPicker, FileInput, FilePicker, PromptPicker};
use crate::ui::{main_menu, upload_ride_data};
use crate::upload::{UploadClient, UploadOutcome};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// SafeRide dashboard in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "saferide")]
#[command(about = "Upload ride data and get a safety score", long_about = None)]
pub struct Args {
    /// Scoring backend base URL (defaults to $SAFERIDE_BACKEND_URL)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Ask for the file path in the terminal instead of opening a dialog
    #[arg(long)]
    pub prompt: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Upload a ride data file and print its safety score
    Upload {
        /// File to upload; opens the picker when omitted
        path: Option<PathBuf>,
    },
    /// Connect a Web3 wallet
    Wallet,
    /// Claim ride rewards
    Rewards,
}

impl Args {
    pub fn picker(&self) -> Box<dyn FilePicker> {
        if self.prompt {
            Box::new(PromptPicker)
        } else {
            Box::new(DialogPicker)
        }
    }
}

/// Build the HTTP client from the arguments and run the chosen command.
pub fn run(args: Args, notifier: &mut dyn Notifier) -> Result<ExitCode> {
    let api = match args.backend_url.clone() {
        Some(url) => ApiClient::new(BackendUrl::Fixed(url)),
        None => ApiClient::from_env(),
    }
    .context("Failed to build HTTP client")?;
    let client = UploadClient::new(api);
    let mut picker = args.picker();
    let succeeded = dispatch(args.command, &client, picker.as_mut(), notifier)?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run one command against an already-built upload client. No command
/// means the interactive menu. Returns `false` when an upload failed.
pub fn dispatch<S: ScoreService>(
    command: Option<Command>,
    client: &UploadClient<S>,
    picker: &mut dyn FilePicker,
    notifier: &mut dyn Notifier,
) -> Result<bool> {
    match command {
        None => {
            main_menu(client, picker, notifier)?;
            Ok(true)
        }
        Some(Command::Upload { path }) => {
            let outcome = match path {
                Some(path) => client.on_file_change(&mut FileInput::with_selection(path), notifier),
                None => upload_ride_data(client, picker, &mut FileInput::new(), notifier)?,
            };
            Ok(outcome != UploadOutcome::Failed)
        }
        Some(Command::Wallet) => {
            connect_wallet(notifier);
            Ok(true)
        }
        Some(Command::Rewards) => {
            claim_rewards(notifier);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockScoreService;
    use crate::error::UploadError;
    use crate::notify::{RecordingNotifier, ToastKind};
    use reqwest::StatusCode;

    struct NoPicker;

    impl FilePicker for NoPicker {
        fn pick(&mut self) -> Result<Option<PathBuf>> {
            Ok(None)
        }
    }

    #[test]
    fn test_args_default() {
        let args = Args::parse_from(["saferide"]);
        assert_eq!(args.backend_url, None);
        assert!(!args.prompt);
        assert_eq!(args.command, None);
    }

    #[test]
    fn test_args_upload_with_path() {
        let args = Args::parse_from(["saferide", "--prompt", "upload", "ride.csv"]);
        assert!(args.prompt);
        assert_eq!(
            args.command,
            Some(Command::Upload {
                path: Some(PathBuf::from("ride.csv"))
            })
        );
    }

    #[test]
    fn test_args_backend_url() {
        let args = Args::parse_from(["saferide", "--backend-url", "http://score:8080", "wallet"]);
        assert_eq!(args.backend_url.as_deref(), Some("http://score:8080"));
        assert_eq!(args.command, Some(Command::Wallet));
    }

    #[test]
    fn test_dispatch_rewards() {
        let client = UploadClient::new(MockScoreService::new());
        let mut notifier = RecordingNotifier::new();

        let ok = dispatch(Some(Command::Rewards), &client, &mut NoPicker, &mut notifier).unwrap();

        assert!(ok);
        assert_eq!(notifier.toasts[0].title, "Rewards claimed!");
    }

    #[test]
    fn test_dispatch_upload_cancelled_is_success() {
        let mut service = MockScoreService::new();
        service.expect_score().never();
        let client = UploadClient::new(service);
        let mut notifier = RecordingNotifier::new();

        let ok = dispatch(
            Some(Command::Upload { path: None }),
            &client,
            &mut NoPicker,
            &mut notifier,
        )
        .unwrap();

        assert!(ok);
        assert!(notifier.toasts.is_empty());
    }

    #[test]
    fn test_dispatch_upload_failure_exits_nonzero() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let mut service = MockScoreService::new();
        service.expect_score().times(1).returning(|_| {
            Err(UploadError::Server {
                status: StatusCode::BAD_GATEWAY,
            })
        });
        let client = UploadClient::new(service);
        let mut notifier = RecordingNotifier::new();

        let ok = dispatch(
            Some(Command::Upload {
                path: Some(file.path().to_path_buf()),
            }),
            &client,
            &mut NoPicker,
            &mut notifier,
        )
        .unwrap();

        assert!(!ok);
        assert_eq!(notifier.toasts.last().unwrap().kind, ToastKind::Error);
    }
}
