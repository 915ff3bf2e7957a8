//! UseCase layer: one use case per external operation.
//!
//! Each use case depends on the `RoomRegistry` trait only, so it can be
//! exercised against `MockRoomRegistry` in tests.

pub mod create_room;
pub mod delete_room;
pub mod get_room_detail;
pub mod get_rooms;
pub mod subscribe_room;
pub mod update_value;

pub use create_room::CreateRoomUseCase;
pub use delete_room::DeleteRoomUseCase;
pub use get_room_detail::{GetRoomDetailUseCase, RoomDetail};
pub use get_rooms::GetRoomsUseCase;
pub use subscribe_room::{SubscribeRoomUseCase, Subscription};
pub use update_value::UpdateValueUseCase;
