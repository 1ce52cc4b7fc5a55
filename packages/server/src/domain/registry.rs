//! ConnectionRegistry trait 定義
//!
//! 「誰がオンラインか」の唯一の情報源です。UserId → 接続ハンドル（`ConnectionId`）
//! の対応を保持します。
//!
//! ## 契約
//!
//! - 1 つの UserId に対するエントリは常に高々 1 つ
//! - `register` は既存のハンドルを置き換え、置き換えられたハンドルを返す
//! - `unregister` はハンドルの完全一致で削除する（UserId ではない）。
//!   置き換え済みの古い接続が閉じても、新しい接続のエントリは残る
//! - どの操作も失敗しない。存在しない ID は「不在」として扱う
//! - 全操作は互いにアトミック

use async_trait::async_trait;

use super::value_object::{ConnectionId, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Map `user_id` to `handle`, returning the displaced handle if any.
    async fn register(&self, user_id: UserId, handle: ConnectionId) -> Option<ConnectionId>;

    /// Remove the entry whose handle is exactly `handle`. Returns its user id.
    async fn unregister(&self, handle: &ConnectionId) -> Option<UserId>;

    /// Current handle for `user_id`.
    async fn lookup(&self, user_id: &UserId) -> Option<ConnectionId>;

    /// Users currently present. Ordering carries no meaning.
    async fn snapshot(&self) -> Vec<UserId>;
}
