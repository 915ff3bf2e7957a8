//! CLI client for the room server.
//!
//! - `api`: HTTP API calls (create, delete, update, list, detail)
//! - `session` / `runner`: WebSocket subscription with reconnection
//! - `publisher`: interactive prompt that publishes every entered line

pub mod api;
pub mod error;
pub mod formatter;
pub mod publisher;
pub mod runner;
pub mod session;

pub use api::ApiClient;
pub use error::ClientError;
