//! MessagePusher trait 定義
//!
//! 接続（匿名接続を含む）への送信を抽象化します。
//! 送信は fire-and-forget で、受信側が処理したかどうかは確認しません。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{error::MessagePushError, event::ServerEvent, value_object::ConnectionId};

/// Outbound channel of one connection; its writer task drains it into the socket.
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Attach an open connection's outbound channel.
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// Detach (and drop) a connection's channel. Returns whether it was attached.
    async fn unregister_client(&self, connection_id: &ConnectionId) -> bool;

    /// Push one event to one connection.
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError>;

    /// Push one event to every attached connection. Returns the connections
    /// whose channel turned out to be closed.
    async fn broadcast(&self, event: &ServerEvent) -> Vec<ConnectionId>;
}
