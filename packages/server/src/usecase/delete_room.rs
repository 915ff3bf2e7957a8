//! UseCase: ルーム削除
//!
//! シークレットを検証し、ルームにクローズを要求する。ルームがプールから
//! 消えるのは、購読者への通知が終わってルームが終了した後。

use std::sync::Arc;

use tracing::info;

use crate::domain::{RoomError, RoomName, RoomRegistry, RoomSecret};

/// ルーム削除のユースケース
pub struct DeleteRoomUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl DeleteRoomUseCase {
    /// 新しい DeleteRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// ルーム削除を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - クローズ要求を受け付けた
    /// * `Err(RoomError::RoomNotFound)` - ルームが存在しない
    /// * `Err(RoomError::WrongSecret)` - シークレット不一致（ルームは開いたまま）
    pub async fn execute(&self, name: RoomName, secret: RoomSecret) -> Result<(), RoomError> {
        self.registry.delete_room(name.clone(), secret).await?;
        info!(room = %name, "Room delete accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::MockRoomRegistry,
        usecase::test_support::{name, secret},
    };

    #[tokio::test]
    async fn test_delete_room_success() {
        // テスト項目: 正しいシークレットでルーム削除が受け付けられる
        // given (前提条件):
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_delete_room()
            .withf(|name, secret| name.as_str() == "alpha" && secret.as_str() == "42")
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = DeleteRoomUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase.execute(name("alpha"), secret("42")).await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_delete_room_errors_are_propagated() {
        // テスト項目: レジストリのエラー（シークレット不一致・存在しない）がそのまま返される
        // given (前提条件):
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_delete_room()
            .withf(|name, _| name.as_str() == "alpha")
            .returning(|_, _| Err(RoomError::WrongSecret));
        registry
            .expect_delete_room()
            .withf(|name, _| name.as_str() == "ghost")
            .returning(|name, _| Err(RoomError::RoomNotFound(name.into_string())));
        let usecase = DeleteRoomUseCase::new(Arc::new(registry));

        // when (操作):
        let wrong_secret = usecase.execute(name("alpha"), secret("1")).await;
        let not_found = usecase.execute(name("ghost"), secret("1")).await;

        // then (期待する結果):
        assert_eq!(wrong_secret, Err(RoomError::WrongSecret));
        assert_eq!(not_found, Err(RoomError::RoomNotFound("ghost".to_string())));
    }
}
