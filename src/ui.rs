// UI layer: the dashboard as an interactive menu using `dialoguer`. Each
// entry maps to one dashboard button.

use crate::actions::{claim_rewards, connect_wallet};
use crate::api::ScoreService;
use crate::notify::Notifier;
use crate::picker::{FileInput, FilePicker};
use crate::upload::{UploadClient, UploadOutcome};
use anyhow::Result;
use dialoguer::Select;

pub const MENU_ITEMS: [&str; 4] = ["Upload Ride Data", "Connect Wallet", "Claim Rewards", "Exit"];

/// Main interactive menu. Runs a select loop until the user chooses "Exit".
///
/// Note: `Select::interact()` is keyboard-driven: you can use arrow keys
/// and Enter to choose an option.
pub fn main_menu<S: ScoreService>(
    client: &UploadClient<S>,
    picker: &mut dyn FilePicker,
    notifier: &mut dyn Notifier,
) -> Result<()> {
    let mut input = FileInput::new();
    loop {
        let selection = Select::new()
            .with_prompt("SafeRide dashboard")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;
        match selection {
            0 => {
                upload_ride_data(client, picker, &mut input, notifier)?;
            }
            1 => connect_wallet(notifier),
            2 => claim_rewards(notifier),
            3 => break,
            _ => {}
        }
    }
    Ok(())
}

/// Open the picker and hand whatever it returns to the upload flow. A
/// cancelled picker leaves the input empty, which the flow ignores.
pub fn upload_ride_data<S: ScoreService>(
    client: &UploadClient<S>,
    picker: &mut dyn FilePicker,
    input: &mut FileInput,
    notifier: &mut dyn Notifier,
) -> Result<UploadOutcome> {
    if let Some(path) = picker.pick()? {
        input.select(path);
    }
    Ok(client.on_file_change(input, notifier))
}
