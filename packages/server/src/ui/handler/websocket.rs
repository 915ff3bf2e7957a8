//! WebSocket subscription handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::{IntoResponse, Response},
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};

use crate::{
    domain::{ClientEvent, ClientEvents, RoomHandle, RoomName},
    infrastructure::dto::websocket::{ConnectQuery, RoomEvent},
    ui::{error::ApiError, state::AppState},
    usecase::Subscription,
};

/// Subscribe to a room.
///
/// The client is registered before the upgrade, so an unknown room is
/// answered with 404 instead of an upgraded socket.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<Response, ApiError> {
    let name = RoomName::new(query.room_id)?;
    let subscription = state.subscribe_room_usecase.execute(name).await?;

    Ok(ws
        .on_upgrade(move |socket| handle_socket(socket, state, subscription))
        .into_response())
}

async fn send_event(
    sender: &mut SplitSink<WebSocket, Message>,
    event: &RoomEvent,
) -> Result<(), axum::Error> {
    let json = match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize room event: {}", e);
            return Ok(());
        }
    };
    sender.send(Message::Text(json.into())).await
}

/// Spawns a task that turns room events into WebSocket frames.
///
/// A change notification carries no value: the latest value is read from
/// the room when the notification is taken, so coalesced notifications
/// still end with the final value. After `room-closed` the socket is closed.
fn pusher_loop(
    mut sender: SplitSink<WebSocket, Message>,
    room: RoomHandle,
    mut events: ClientEvents,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.next().await {
            let event = match event {
                ClientEvent::ValueChanged => match room.get_value().await {
                    Ok(value) => RoomEvent::value_changed(value),
                    Err(_) => RoomEvent::RoomClosed,
                },
                ClientEvent::RoomClosed => RoomEvent::RoomClosed,
            };

            if send_event(&mut sender, &event).await.is_err() {
                break;
            }

            if event == RoomEvent::RoomClosed {
                tracing::info!(room = %room.name(), "Room closed, closing socket");
                let _ = sender.send(Message::Close(None)).await;
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, subscription: Subscription) {
    let Subscription {
        room,
        client_id,
        events,
        initial_value,
    } = subscription;
    let (mut sender, mut receiver) = socket.split();

    if let Err(e) = send_event(&mut sender, &RoomEvent::initial_value(initial_value)).await {
        tracing::warn!(client_id = %client_id, "Failed to send initial value: {}", e);
        state
            .subscribe_room_usecase
            .unsubscribe(&room, client_id)
            .await;
        return;
    }

    // Inbound frames carry nothing; only watch for the end of the connection
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Close(_)) => {
                    tracing::debug!(client_id = %client_id, "Client requested close");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(client_id = %client_id, "WebSocket error: {}", e);
                    break;
                }
            }
        }
    });

    let mut send_task = pusher_loop(sender, room.clone(), events);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state
        .subscribe_room_usecase
        .unsubscribe(&room, client_id)
        .await;
}
