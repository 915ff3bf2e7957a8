//! UseCase: ルーム詳細取得

use std::sync::Arc;

use crate::domain::{RoomError, RoomName, RoomRegistry, RoomValue, Timestamp};

/// ルーム詳細（ルームの現在の状態）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetail {
    pub name: RoomName,
    pub value: RoomValue,
    /// 登録中の購読者数
    pub client_count: usize,
    pub created_at: Timestamp,
}

/// ルーム詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl GetRoomDetailUseCase {
    /// 新しい GetRoomDetailUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// ルーム詳細を取得
    ///
    /// ルームへの問い合わせは他の操作と同じくアイドル時間をリセットする。
    pub async fn execute(&self, name: RoomName) -> Result<RoomDetail, RoomError> {
        let entry = self.registry.lookup_room(name).await?;
        let snapshot = entry.handle().get_snapshot().await?;

        Ok(RoomDetail {
            name: entry.handle().name().clone(),
            value: snapshot.value,
            client_count: snapshot.client_count,
            created_at: entry.created_at(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Client, ClientId, MockRoomRegistry},
        usecase::test_support::{name, spawn_entry},
    };

    #[tokio::test]
    async fn test_get_room_detail_success() {
        // テスト項目: ルームの値・購読者数・作成時刻が返される
        // given (前提条件):
        let (entry, room) = spawn_entry("alpha", "42");
        room.set_value(RoomValue::new("hello".to_string()).unwrap())
            .await
            .unwrap();
        let (client, _events) = Client::new(ClientId::generate());
        room.register_client(client).await.unwrap();

        let mut registry = MockRoomRegistry::new();
        registry
            .expect_lookup_room()
            .returning(move |_| Ok(entry.clone()));
        let usecase = GetRoomDetailUseCase::new(Arc::new(registry));

        // when (操作):
        let detail = usecase.execute(name("alpha")).await.unwrap();

        // then (期待する結果):
        assert_eq!(
            detail,
            RoomDetail {
                name: name("alpha"),
                value: RoomValue::new("hello".to_string()).unwrap(),
                client_count: 1,
                created_at: Timestamp::new(1_000),
            }
        );
    }

    #[tokio::test]
    async fn test_get_room_detail_of_closed_room() {
        // テスト項目: 終了済み（未回収）のルームは RoomNotFound になる
        // given (前提条件):
        let (entry, room) = spawn_entry("alpha", "42");
        room.close();
        room.closed().await;

        let mut registry = MockRoomRegistry::new();
        registry
            .expect_lookup_room()
            .returning(move |_| Ok(entry.clone()));
        let usecase = GetRoomDetailUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase.execute(name("alpha")).await;

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::RoomNotFound("alpha".to_string())));
    }
}
