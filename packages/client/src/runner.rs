//! Subscription runner with reconnection support.

use std::time::Duration;

use crate::{
    api::ApiClient,
    error::ClientError,
    session::{SessionEnd, run_subscribe_session},
};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 5;

/// Subscribe to a room, reconnecting when the connection drops.
///
/// Stops when the room closes, the user interrupts, the room turns out not
/// to exist, or the reconnection attempts are exhausted.
pub async fn run_subscriber(api: &ApiClient, room: &str) -> Result<(), ClientError> {
    let mut reconnect_count = 0;

    loop {
        tracing::info!(
            "Attempting to subscribe to '{}' (attempt {}/{})",
            room,
            reconnect_count + 1,
            MAX_RECONNECT_ATTEMPTS
        );

        match run_subscribe_session(api, room).await {
            Ok(SessionEnd::RoomClosed) => {
                tracing::info!("Room '{}' closed", room);
                return Ok(());
            }
            Ok(SessionEnd::Interrupted) => {
                tracing::info!("Subscription ended by user");
                return Ok(());
            }
            Err(e @ ClientError::RoomNotFound(_)) => return Err(e),
            Err(e) => {
                tracing::warn!("Connection lost: {}", e);
                reconnect_count += 1;

                if reconnect_count >= MAX_RECONNECT_ATTEMPTS {
                    tracing::error!(
                        "Failed to reconnect after {} attempts. Exiting.",
                        MAX_RECONNECT_ATTEMPTS
                    );
                    return Err(e);
                }

                tracing::info!(
                    "Reconnecting in {} seconds... (attempt {}/{})",
                    RECONNECT_INTERVAL_SECS,
                    reconnect_count + 1,
                    MAX_RECONNECT_ATTEMPTS
                );

                tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
            }
        }
    }
}
