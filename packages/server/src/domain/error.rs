//! Domain error types.

use thiserror::Error;

/// Errors reported by room and room pool operations.
///
/// All of them are returned synchronously as the result of the operation
/// that caused them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    /// `create` on a name that is still held by a live (or not yet reaped) room
    #[error("Room '{0}' already exists")]
    RoomNameTaken(String),

    /// Unknown room, or a room that has already terminated
    #[error("Room '{0}' not found")]
    RoomNotFound(String),

    /// Secret mismatch on delete or update
    #[error("Wrong room secret")]
    WrongSecret,

    /// The room pool task is gone; only happens while the process is exiting
    #[error("Room pool is unavailable")]
    PoolUnavailable,
}

/// Validation errors raised when building value objects from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("Room name must not be empty")]
    EmptyRoomName,

    #[error("Room name is too long ({length} > {max} characters)")]
    RoomNameTooLong { length: usize, max: usize },

    #[error("Room secret must not be empty")]
    EmptySecret,

    #[error("Room secret is too long ({length} > {max} characters)")]
    SecretTooLong { length: usize, max: usize },

    #[error("Room value is too long ({length} > {max} bytes)")]
    ValueTooLong { length: usize, max: usize },
}
