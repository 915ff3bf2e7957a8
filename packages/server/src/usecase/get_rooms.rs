//! UseCase: ルーム一覧取得

use std::sync::Arc;

use crate::domain::{RoomError, RoomRegistry, RoomSummary};

/// ルーム一覧取得のユースケース
pub struct GetRoomsUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl GetRoomsUseCase {
    /// 新しい GetRoomsUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// ルーム一覧を取得（名前順）
    pub async fn execute(&self) -> Result<Vec<RoomSummary>, RoomError> {
        self.registry.list_rooms().await
    }
}
