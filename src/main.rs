// Entrypoint for the SafeRide CLI.
// - Keeps `main` small: parse arguments, set up logging and hand over to
//   `cli::run`.
// - Set `RUST_LOG=debug` to see request details and failure causes.

use clap::Parser;
use saferide_cli::{cli, notify::TerminalNotifier};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = cli::Args::parse();
    let mut notifier = TerminalNotifier::new();
    cli::run(args, &mut notifier)
}
