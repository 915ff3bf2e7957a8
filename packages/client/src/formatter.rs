//! Output formatting for the client.

use qrroom_server::infrastructure::dto::{
    http::{RoomDetailDto, RoomSummaryDto},
    websocket::RoomEvent,
};
use qrroom_shared::time::timestamp_to_jst_rfc3339;

/// Formatter for client display
pub struct EventFormatter;

impl EventFormatter {
    /// Format a room event received at `received_at` (Unix milliseconds)
    pub fn format_event(event: &RoomEvent, received_at: i64) -> String {
        let timestamp = timestamp_to_jst_rfc3339(received_at);
        match event {
            RoomEvent::InitialValue { value } => {
                format!("[{}] current value: {}", timestamp, display_value(value))
            }
            RoomEvent::ValueChanged { value } => {
                format!("[{}] value changed: {}", timestamp, display_value(value))
            }
            RoomEvent::RoomClosed => format!("[{}] room closed", timestamp),
        }
    }

    /// Format the room list
    pub fn format_room_list(rooms: &[RoomSummaryDto]) -> String {
        let mut output = String::new();
        output.push_str("============================================================\n");
        output.push_str("Rooms:\n");

        if rooms.is_empty() {
            output.push_str("(No rooms)\n");
        } else {
            for room in rooms {
                output.push_str(&format!(
                    "{} - created at {}\n",
                    room.room_id, room.created_at
                ));
            }
        }

        output.push_str("============================================================\n");
        output
    }

    /// Format a room detail
    pub fn format_room_detail(room: &RoomDetailDto) -> String {
        format!(
            "room: {}\nvalue: {}\nsubscribers: {}\ncreated at: {}\n",
            room.room_id,
            display_value(&room.value),
            room.subscribers,
            room.created_at
        )
    }

    /// Format the confirmation shown after a value was published
    pub fn format_published(value: &str, published_at: i64) -> String {
        format!(
            "published at {}: {}",
            timestamp_to_jst_rfc3339(published_at),
            display_value(value)
        )
    }
}

fn display_value(value: &str) -> &str {
    if value.is_empty() { "(empty)" } else { value }
}
