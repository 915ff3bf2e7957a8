//! RoomRegistry trait 定義
//!
//! UseCase 層が必要とするルーム管理のインターフェースを定義します。
//! 実装は `RoomPoolHandle`（アクターへのハンドル）が提供します。

use async_trait::async_trait;

use super::{
    error::RoomError,
    message::RoomSummary,
    pool::RoomEntry,
    value_object::{RoomName, RoomSecret},
};

/// Room Registry trait
///
/// UseCase 層はこの trait に依存し、アクターの具体的な実装には依存しない。
/// テストでは `MockRoomRegistry` に差し替える。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// ルームを作成（名前が使用中なら `RoomNameTaken`）
    async fn create_room(&self, name: RoomName, secret: RoomSecret) -> Result<(), RoomError>;

    /// 名前でルームを取得
    async fn lookup_room(&self, name: RoomName) -> Result<RoomEntry, RoomError>;

    /// シークレットを検証してルームのクローズを要求
    async fn delete_room(&self, name: RoomName, secret: RoomSecret) -> Result<(), RoomError>;

    /// ルーム一覧を取得（名前順）
    async fn list_rooms(&self) -> Result<Vec<RoomSummary>, RoomError>;
}
