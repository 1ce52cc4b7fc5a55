//! UseCase: 接続のライフサイクル（ハンドシェイクと切断）
//!
//! ## open
//!
//! 1. 送信チャンネルを MessagePusher に登録（匿名接続もブロードキャストを受信する）
//! 2. 識別子あり: レジストリに登録し、置き換えた古い接続のチャンネルを破棄してから
//!    presence を全体に通知
//! 3. 識別子なし: レジストリには登録せず、現在の presence をその接続にだけ送る
//!
//! ## close
//!
//! 接続ごとに 1 回だけ実行され、匿名接続を含めて必ず presence を再通知します。
//! ハンドルの完全一致でレジストリから削除するため、置き換え済みの古い接続が
//! 閉じても新しい接続は残ります。

use std::sync::Arc;

use crate::domain::{
    ConnectionRegistry, ConnectionSession, ConnectionState, MessagePusher, PusherChannel, UserId,
};

use super::broadcast_presence::PresenceBroadcaster;

pub struct ConnectionLifecycle {
    registry: Arc<dyn ConnectionRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
    presence: Arc<PresenceBroadcaster>,
}

impl ConnectionLifecycle {
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
        presence: Arc<PresenceBroadcaster>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
            presence,
        }
    }

    /// Handshake a new connection. `identity` is the already-verified user id,
    /// `None` for anonymous connections.
    pub async fn open(&self, identity: Option<UserId>, sender: PusherChannel) -> ConnectionSession {
        let session = ConnectionSession::new(identity);
        let connection_id = session.id();
        self.message_pusher
            .register_client(connection_id, sender)
            .await;

        if let Some(user_id) = session.user_id() {
            let displaced = self.registry.register(user_id.clone(), connection_id).await;
            if let Some(old) = displaced {
                // Dropping the old channel ends that connection's writer task.
                self.message_pusher.unregister_client(&old).await;
                tracing::info!(
                    "User '{}' reconnected; connection {} replaced by {}",
                    user_id,
                    old,
                    connection_id
                );
            }
        }

        match session.complete_handshake() {
            Ok(ConnectionState::Registered) => {
                tracing::info!("Connection {} registered", connection_id);
                self.presence.announce().await;
            }
            Ok(_) => {
                tracing::info!("Anonymous connection {} opened", connection_id);
                self.presence.send_snapshot_to(&connection_id).await;
            }
            Err(e) => tracing::warn!("Connection {}: {}", connection_id, e),
        }

        session
    }

    /// Tear a connection down. Only the first call per session does anything;
    /// returns whether this call performed the teardown.
    pub async fn close(&self, session: &ConnectionSession) -> bool {
        if session.close().is_err() {
            tracing::debug!("Connection {} already closed", session.id());
            return false;
        }

        let connection_id = session.id();
        let removed = self.registry.unregister(&connection_id).await;
        self.message_pusher.unregister_client(&connection_id).await;

        match removed {
            Some(user_id) => {
                tracing::info!("User '{}' disconnected (connection {})", user_id, connection_id)
            }
            None => tracing::info!("Connection {} closed", connection_id),
        }

        self.presence.announce().await;
        true
    }
}
