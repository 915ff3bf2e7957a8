//! UseCase: ルームの購読と購読解除
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SubscribeRoomUseCase::execute() / unsubscribe() メソッド
//! - 購読開始時に現在の値が返され、以降の変更が通知されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：購読して初期値と変更通知を受け取る
//! - 正常系：購読解除後は通知対象から外れる
//! - エッジケース：終了済みルームからの購読解除はエラーにならない
//! - 異常系：存在しないルームの購読

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    Client, ClientEvents, ClientId, RoomError, RoomHandle, RoomName, RoomRegistry, RoomValue,
};

/// 購読の結果
///
/// `events` を待ち受け、`ValueChanged` を受け取ったら `room` から最新値を取得する。
#[derive(Debug)]
pub struct Subscription {
    pub room: RoomHandle,
    pub client_id: ClientId,
    pub events: ClientEvents,
    /// 登録直後のルームの値
    pub initial_value: RoomValue,
}

/// 購読のユースケース
pub struct SubscribeRoomUseCase {
    registry: Arc<dyn RoomRegistry>,
}

impl SubscribeRoomUseCase {
    /// 新しい SubscribeRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// 購読を開始
    ///
    /// 登録してから値を読むので、登録と読み取りの間の変更は通知として届く。
    pub async fn execute(&self, name: RoomName) -> Result<Subscription, RoomError> {
        let entry = self.registry.lookup_room(name).await?;
        let room = entry.handle().clone();

        let client_id = ClientId::generate();
        let (client, events) = Client::new(client_id);
        room.register_client(client).await?;
        let initial_value = room.get_value().await?;

        info!(room = %room.name(), client_id = %client_id, "Subscribed");
        Ok(Subscription {
            room,
            client_id,
            events,
            initial_value,
        })
    }

    /// 購読を解除
    ///
    /// ルームが既に終了している場合は何もしない。
    pub async fn unsubscribe(&self, room: &RoomHandle, client_id: ClientId) {
        match room.deregister_client(client_id).await {
            Ok(()) => info!(room = %room.name(), client_id = %client_id, "Unsubscribed"),
            Err(e) => debug!(room = %room.name(), client_id = %client_id, error = %e, "Room already gone"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ClientEvent, MockRoomRegistry},
        usecase::test_support::{name, spawn_entry},
    };

    #[tokio::test]
    async fn test_subscribe_returns_current_value_and_receives_changes() {
        // テスト項目: 購読開始時に現在の値が返され、以降の変更が通知される
        // given (前提条件):
        let (entry, room) = spawn_entry("alpha", "42");
        room.set_value(RoomValue::new("first".to_string()).unwrap())
            .await
            .unwrap();
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_lookup_room()
            .returning(move |_| Ok(entry.clone()));
        let usecase = SubscribeRoomUseCase::new(Arc::new(registry));

        // when (操作):
        let mut subscription = usecase.execute(name("alpha")).await.unwrap();
        room.set_value(RoomValue::new("second".to_string()).unwrap())
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(subscription.initial_value.as_str(), "first");
        assert_eq!(subscription.events.id(), subscription.client_id);
        assert_eq!(
            subscription.events.next().await,
            Some(ClientEvent::ValueChanged)
        );
        assert_eq!(subscription.room.get_value().await.unwrap().as_str(), "second");
        assert_eq!(room.get_snapshot().await.unwrap().client_count, 1);
    }

    #[tokio::test]
    async fn test_unsubscribe_removes_client() {
        // テスト項目: 購読解除するとルームのクライアント数が減る
        // given (前提条件):
        let (entry, room) = spawn_entry("alpha", "42");
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_lookup_room()
            .returning(move |_| Ok(entry.clone()));
        let usecase = SubscribeRoomUseCase::new(Arc::new(registry));
        let subscription = usecase.execute(name("alpha")).await.unwrap();

        // when (操作):
        usecase
            .unsubscribe(&subscription.room, subscription.client_id)
            .await;

        // then (期待する結果):
        assert_eq!(room.get_snapshot().await.unwrap().client_count, 0);
    }

    #[tokio::test]
    async fn test_unsubscribe_from_closed_room_is_harmless() {
        // テスト項目: 終了済みルームからの購読解除はパニックせずに完了する
        // given (前提条件):
        let (entry, room) = spawn_entry("alpha", "42");
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_lookup_room()
            .returning(move |_| Ok(entry.clone()));
        let usecase = SubscribeRoomUseCase::new(Arc::new(registry));
        let mut subscription = usecase.execute(name("alpha")).await.unwrap();
        room.close();
        room.closed().await;

        // when (操作):
        usecase
            .unsubscribe(&subscription.room, subscription.client_id)
            .await;

        // then (期待する結果): クローズ通知は受け取れる
        assert_eq!(
            subscription.events.next().await,
            Some(ClientEvent::RoomClosed)
        );
        assert!(room.is_closed());
    }

    #[tokio::test]
    async fn test_subscribe_unknown_room() {
        // テスト項目: 存在しないルームの購読は RoomNotFound になる
        // given (前提条件):
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_lookup_room()
            .returning(|name| Err(RoomError::RoomNotFound(name.into_string())));
        let usecase = SubscribeRoomUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase.execute(name("ghost")).await;

        // then (期待する結果):
        assert_eq!(
            result.err(),
            Some(RoomError::RoomNotFound("ghost".to_string()))
        );
    }
}
