//! UseCase: ルームの値を更新
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateValueUseCase::execute() メソッド
//! - シークレット検証後に値が更新され、購読者に通知されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：正しいシークレットで更新
//! - 異常系：シークレット不一致（値は変わらない）
//! - 異常系：存在しないルーム

use std::sync::Arc;

use tracing::debug;

use crate::domain::{RoomError, RoomName, RoomRegistry, RoomSecret, RoomValue};

/// 値更新のユースケース
pub struct UpdateValueUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl UpdateValueUseCase {
    /// 新しい UpdateValueUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// 値更新を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 更新完了（購読者への通知はルームが行う）
    /// * `Err(RoomError::WrongSecret)` - シークレット不一致
    /// * `Err(RoomError::RoomNotFound)` - ルームが存在しない、または終了済み
    pub async fn execute(
        &self,
        name: RoomName,
        secret: RoomSecret,
        value: RoomValue,
    ) -> Result<(), RoomError> {
        let entry = self.registry.lookup_room(name).await?;
        let room = entry.authorize(&secret)?;

        let length = value.as_str().len();
        room.set_value(value).await?;

        debug!(room = %room.name(), length, "Room value updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Client, ClientEvent, ClientId, MockRoomRegistry},
        usecase::test_support::{name, secret, spawn_entry},
    };

    fn value(raw: &str) -> RoomValue {
        RoomValue::new(raw.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_update_value_success() {
        // テスト項目: 正しいシークレットで値が更新され、購読者に通知される
        // given (前提条件):
        let (entry, room) = spawn_entry("alpha", "42");
        let (client, mut events) = Client::new(ClientId::generate());
        room.register_client(client).await.unwrap();

        let mut registry = MockRoomRegistry::new();
        registry
            .expect_lookup_room()
            .returning(move |_| Ok(entry.clone()));
        let usecase = UpdateValueUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase
            .execute(name("alpha"), secret("42"), value("hello"))
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
        assert_eq!(room.get_value().await.unwrap(), value("hello"));
        assert_eq!(events.next().await, Some(ClientEvent::ValueChanged));
    }

    #[tokio::test]
    async fn test_update_value_wrong_secret() {
        // テスト項目: シークレット不一致では WrongSecret が返され、値は変わらない
        // given (前提条件):
        let (entry, room) = spawn_entry("alpha", "42");
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_lookup_room()
            .returning(move |_| Ok(entry.clone()));
        let usecase = UpdateValueUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase
            .execute(name("alpha"), secret("7"), value("hello"))
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::WrongSecret));
        assert_eq!(room.get_value().await.unwrap(), RoomValue::default());
    }

    #[tokio::test]
    async fn test_update_value_unknown_room() {
        // テスト項目: 存在しないルームでは RoomNotFound が返される
        // given (前提条件):
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_lookup_room()
            .returning(|name| Err(RoomError::RoomNotFound(name.into_string())));
        let usecase = UpdateValueUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase
            .execute(name("ghost"), secret("42"), value("hello"))
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::RoomNotFound("ghost".to_string())));
    }
}
