//! Helpers shared by the QRRoom server and client binaries.

pub mod logger;
pub mod time;
