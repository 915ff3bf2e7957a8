//! Infrastructure layer: wire formats shared by the server and the client.

pub mod dto;
