//! Re-triggered refresh loop for the terminal

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::panel::Panel;

/// Refresh status and log every `interval` until `cancel` fires.
///
/// Returns the number of completed refresh rounds.
pub async fn watch(panel: &Panel, interval: Duration, cancel: CancellationToken) -> u64 {
    let mut rounds = 0;
    loop {
        panel.refresh().await;
        rounds += 1;
        tracing::debug!("Refresh round {} done", rounds);

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = cancel.cancelled() => {
                tracing::debug!("Watch loop cancelled");
                break;
            }
        }
    }
    rounds
}
