//! Domain layer: rooms, their registry, and the subscribers registered in them.
//!
//! Every piece of mutable state lives inside an actor task. `RoomActor` owns
//! one room's value and member set; `RoomPoolActor` owns the name → room
//! mapping. Everything outside talks to them through cloneable handles.

pub mod client;
pub mod error;
pub mod message;
pub mod pool;
pub mod registry;
pub mod room;
pub mod value_object;

pub use client::{Client, ClientEvent, ClientEvents, Delivery};
pub use error::{RoomError, ValueObjectError};
pub use message::{RoomSnapshot, RoomSummary};
pub use pool::{DEFAULT_IDLE_TIMEOUT, RoomEntry, RoomPoolHandle};
pub use registry::RoomRegistry;
pub use room::{RoomActor, RoomHandle};
pub use value_object::{ClientId, RoomName, RoomSecret, RoomValue, Timestamp};

#[cfg(test)]
pub use registry::MockRoomRegistry;
