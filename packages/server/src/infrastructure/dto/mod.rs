//! Data Transfer Objects (DTOs) for the room server.
//!
//! DTOs are organized by protocol:
//! - `http`: HTTP API request and response DTOs
//! - `websocket`: WebSocket event DTOs

pub mod conversion;
pub mod http;
pub mod websocket;
