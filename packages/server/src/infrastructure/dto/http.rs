//! HTTP API DTOs.

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

/// `POST /api/rooms` request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRoomRequest {
    pub room_id: String,
    /// Omitted or null: the server generates one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// `POST /api/rooms` response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRoomResponse {
    pub room_id: String,
    pub password: String,
}

/// `DELETE /api/rooms/{room_id}` request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteRoomRequest {
    pub password: String,
}

/// `PUT /api/rooms/{room_id}/value` request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateValueRequest {
    pub password: String,
    pub value: String,
}

/// Entry of `GET /api/rooms`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomSummaryDto {
    pub room_id: String,
    /// RFC 3339, JST
    pub created_at: String,
}

/// `GET /api/rooms/{room_id}` response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomDetailDto {
    pub room_id: String,
    pub value: String,
    pub subscribers: usize,
    /// RFC 3339, JST
    pub created_at: String,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
