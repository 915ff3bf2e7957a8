//! Shared application state.

use std::sync::Arc;

use crate::usecase::{
    CreateRoomUseCase, DeleteRoomUseCase, GetRoomDetailUseCase, GetRoomsUseCase,
    SubscribeRoomUseCase, UpdateValueUseCase,
};

/// Shared application state
pub struct AppState {
    /// CreateRoomUseCase（ルーム作成のユースケース）
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    /// DeleteRoomUseCase（ルーム削除のユースケース）
    pub delete_room_usecase: Arc<DeleteRoomUseCase>,
    /// UpdateValueUseCase（値更新のユースケース）
    pub update_value_usecase: Arc<UpdateValueUseCase>,
    /// SubscribeRoomUseCase（購読のユースケース）
    pub subscribe_room_usecase: Arc<SubscribeRoomUseCase>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}
