//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を ConnectionId で管理（匿名接続も含む）
//! - イベントの JSON エンコードと送信（push_to, broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われ、この実装は
//! 生成された sender を受け取って送信に使います。送信先の決定はロック内、
//! 実際の送信はロック外で行います。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel, ServerEvent},
    infrastructure::dto::conversion::encode_server_event,
};

/// WebSocket を使った MessagePusher 実装
pub struct WebSocketMessagePusher {
    /// Key: ConnectionId, Value: その接続の送信チャンネル
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self { clients }
    }

    /// Number of attached connections, anonymous ones included.
    pub async fn connection_count(&self) -> usize {
        self.clients.lock().await.len()
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(HashMap::new())))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(connection_id, sender);
        tracing::debug!("Connection {} attached to MessagePusher", connection_id);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) -> bool {
        let removed = self.clients.lock().await.remove(connection_id).is_some();
        if removed {
            tracing::debug!("Connection {} detached from MessagePusher", connection_id);
        }
        removed
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError> {
        let sender = self
            .clients
            .lock()
            .await
            .get(connection_id)
            .cloned()
            .ok_or_else(|| MessagePushError::ConnectionNotFound(connection_id.to_string()))?;

        let content = encode_server_event(event)
            .map_err(|e| MessagePushError::EncodeFailed(e.to_string()))?;
        sender
            .send(content)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed '{}' to connection {}", event.name(), connection_id);
        Ok(())
    }

    async fn broadcast(&self, event: &ServerEvent) -> Vec<ConnectionId> {
        let content = match encode_server_event(event) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Failed to encode '{}' for broadcast: {}", event.name(), e);
                return Vec::new();
            }
        };

        let targets: Vec<(ConnectionId, PusherChannel)> = self
            .clients
            .lock()
            .await
            .iter()
            .map(|(id, sender)| (*id, sender.clone()))
            .collect();

        // ブロードキャストでは一部の送信失敗を許容し、失敗した接続を呼び出し元へ返す
        let mut failed = Vec::new();
        for (id, sender) in targets {
            if sender.send(content.clone()).is_err() {
                tracing::warn!("Failed to push '{}' to connection {}", event.name(), id);
                failed.push(id);
            }
        }
        tracing::debug!(
            "Broadcasted '{}' ({} failed)",
            event.name(),
            failed.len()
        );
        failed
    }
}
