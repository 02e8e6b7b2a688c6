// The two dashboard buttons that have no backend behind them yet. They
// only tell the user what would happen.

use crate::notify::{Notifier, Toast};

/// "Connect Wallet" button.
pub fn connect_wallet(notifier: &mut dyn Notifier) {
    notifier.notify(Toast::info(
        "Wallet connection coming soon!",
        "Connect your Web3 wallet to claim rewards",
    ));
}

/// "Claim Rewards" button.
pub fn claim_rewards(notifier: &mut dyn Notifier) {
    notifier.notify(Toast::success(
        "Rewards claimed!",
        "150 SafeRide Tokens added to your wallet",
    ));
}
