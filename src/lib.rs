// Library root
// -----------
// This crate exposes the pieces behind the SafeRide dashboard CLI. The
// binary (`main.rs`) wires them together.
//
// Module responsibilities:
// - `api`: ride-data file handle, the score response and the HTTP client
//   that talks to the scoring backend.
// - `upload`: the upload-and-score flow driven by a file selection.
// - `notify`: toast notifications and their terminal renderer.
// - `picker`: file selection (native dialog or typed path).
// - `actions`: the wallet and rewards dashboard buttons.
// - `ui`: the interactive dashboard menu.
//
// The HTTP client and the notifier are passed in as traits so the flow
// can be tested without a terminal or a live backend.
pub mod actions;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod notify;
pub mod picker;
pub mod ui;
pub mod upload;
