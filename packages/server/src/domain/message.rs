//! Mailbox messages for the room and room pool actors.
//!
//! Requests that need an answer carry a oneshot `respond_to` sender. If the
//! actor terminates before answering, the sender is dropped and the caller's
//! receive fails, which the handles report as `RoomError::RoomNotFound`.

use tokio::sync::oneshot;

use super::{
    client::Client,
    error::RoomError,
    pool::RoomEntry,
    value_object::{ClientId, RoomName, RoomSecret, RoomValue, Timestamp},
};

/// Messages handled by `RoomActor`.
#[derive(Debug)]
pub enum RoomMessage {
    RegisterClient {
        client: Client,
        respond_to: oneshot::Sender<()>,
    },
    DeregisterClient {
        client_id: ClientId,
        respond_to: oneshot::Sender<()>,
    },
    SetValue {
        value: RoomValue,
        respond_to: oneshot::Sender<()>,
    },
    GetValue {
        respond_to: oneshot::Sender<RoomValue>,
    },
    GetSnapshot {
        respond_to: oneshot::Sender<RoomSnapshot>,
    },
    Close,
}

/// Messages handled by `RoomPoolActor`.
#[derive(Debug)]
pub enum PoolMessage {
    Create {
        name: RoomName,
        secret: RoomSecret,
        respond_to: oneshot::Sender<Result<(), RoomError>>,
    },
    Lookup {
        name: RoomName,
        respond_to: oneshot::Sender<Result<RoomEntry, RoomError>>,
    },
    Delete {
        name: RoomName,
        secret: RoomSecret,
        respond_to: oneshot::Sender<Result<(), RoomError>>,
    },
    List {
        respond_to: oneshot::Sender<Vec<RoomSummary>>,
    },
    /// Sent by a room's supervisor task once the room has terminated.
    Reap { name: RoomName, generation: u64 },
}

/// Point-in-time view of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub value: RoomValue,
    pub client_count: usize,
}

/// Registry entry summary used for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub name: RoomName,
    pub created_at: Timestamp,
}
