//! QRRoom server library.
//!
//! A room holds one shared value (a QR-code payload). The room's creator
//! updates it with the room secret; any number of subscribers hold a
//! WebSocket open and receive the new value as soon as it changes.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
