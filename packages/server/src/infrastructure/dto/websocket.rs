//! WebSocket DTOs.

use serde::{Deserialize, Serialize};

/// Query parameters for the WebSocket subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectQuery {
    pub room_id: String,
}

/// Event pushed to a subscriber (server → client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RoomEvent {
    /// First frame after the subscription starts
    InitialValue { value: String },
    ValueChanged { value: String },
    /// Last frame; the server closes the socket afterwards
    RoomClosed,
}
