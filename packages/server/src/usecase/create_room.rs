//! UseCase: ルーム作成
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - シークレット指定時はそのまま、未指定時は生成したものが登録されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：シークレットを指定して作成
//! - 正常系：シークレットを省略して作成（サーバー側で生成）
//! - 異常系：既に使用中の名前での作成

use std::sync::Arc;

use tracing::info;

use crate::domain::{RoomError, RoomName, RoomRegistry, RoomSecret};

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// RoomRegistry（ルーム管理の抽象化）
    registry: Arc<dyn RoomRegistry>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// ルーム作成を実行
    ///
    /// # Arguments
    ///
    /// * `name` - ルーム名
    /// * `secret` - ルームのシークレット（`None` の場合は生成する）
    ///
    /// # Returns
    ///
    /// * `Ok(RoomSecret)` - 登録されたシークレット（作成者に返す）
    /// * `Err(RoomError::RoomNameTaken)` - 名前が使用中
    pub async fn execute(
        &self,
        name: RoomName,
        secret: Option<RoomSecret>,
    ) -> Result<RoomSecret, RoomError> {
        let generated = secret.is_none();
        let secret = secret.unwrap_or_else(RoomSecret::generate);

        self.registry
            .create_room(name.clone(), secret.clone())
            .await?;

        info!(room = %name, generated_secret = generated, "Room created");
        Ok(secret)
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
    async fn test_create_room_with_given_secret() {
        // テスト項目: 指定したシークレットでルームが作成される
        // given (前提条件):
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_create_room()
            .withf(|name, secret| name.as_str() == "alpha" && secret.as_str() == "42")
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = CreateRoomUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase.execute(name("alpha"), Some(secret("42"))).await;

        // then (期待する結果):
        assert_eq!(result, Ok(secret("42")));
    }

    #[tokio::test]
    async fn test_create_room_generates_secret_when_omitted() {
        // テスト項目: シークレット省略時は生成したシークレットが登録され、返される
        // given (前提条件):
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_create_room()
            .withf(|_, secret| secret.as_str().len() == 32)
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = CreateRoomUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase.execute(name("alpha"), None).await;

        // then (期待する結果):
        let generated = result.unwrap();
        assert_eq!(generated.as_str().len(), 32);
    }

    #[tokio::test]
    async fn test_create_room_name_taken() {
        // テスト項目: 使用中の名前では RoomNameTaken が返される
        // given (前提条件):
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_create_room()
            .returning(|name, _| Err(RoomError::RoomNameTaken(name.into_string())));
        let usecase = CreateRoomUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase.execute(name("alpha"), Some(secret("7"))).await;

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::RoomNameTaken("alpha".to_string())));
    }
}
