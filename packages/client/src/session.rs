//! WebSocket subscription session.

use futures_util::{SinkExt, StreamExt};
use qrroom_server::infrastructure::dto::websocket::RoomEvent;
use qrroom_shared::time::get_jst_timestamp;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{Error as WsError, protocol::Message},
};

use crate::{api::ApiClient, error::ClientError, formatter::EventFormatter};

/// How a subscription session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The server reported `room-closed`
    RoomClosed,
    /// The user pressed Ctrl+C
    Interrupted,
}

/// Run one subscription session, printing every event
///
/// Returns `Err(ClientError::ConnectionError)` when the connection drops
/// before the room was closed.
pub async fn run_subscribe_session(api: &ApiClient, room: &str) -> Result<SessionEnd, ClientError> {
    let url = api.ws_url(room)?;

    let (ws_stream, _response) = match connect_async(url.as_str()).await {
        Ok(result) => result,
        Err(WsError::Http(response)) if response.status().as_u16() == 404 => {
            return Err(ClientError::RoomNotFound(room.to_string()));
        }
        Err(e) => return Err(ClientError::ConnectionError(e.to_string())),
    };

    tracing::info!("Subscribed to room '{}'", room);
    println!("\nWatching room '{}'. Press Ctrl+C to exit.\n", room);

    let (mut write, mut read) = ws_stream.split();

    loop {
        let message = tokio::select! {
            message = read.next() => message,
            _ = tokio::signal::ctrl_c() => {
                let _ = write.send(Message::Close(None)).await;
                return Ok(SessionEnd::Interrupted);
            }
        };

        match message {
            Some(Ok(Message::Text(text))) => match serde_json::from_str::<RoomEvent>(&text) {
                Ok(event) => {
                    println!("{}", EventFormatter::format_event(&event, get_jst_timestamp()));
                    if event == RoomEvent::RoomClosed {
                        return Ok(SessionEnd::RoomClosed);
                    }
                }
                Err(e) => tracing::warn!("Failed to parse room event: {}", e),
            },
            Some(Ok(Message::Close(_))) | None => {
                tracing::info!("Server closed the connection");
                return Err(ClientError::ConnectionError(
                    "Connection closed by server".to_string(),
                ));
            }
            Some(Err(e)) => {
                tracing::warn!("WebSocket read error: {}", e);
                return Err(ClientError::ConnectionError(e.to_string()));
            }
            Some(Ok(_)) => {}
        }
    }
}
