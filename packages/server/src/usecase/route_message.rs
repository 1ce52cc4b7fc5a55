//! UseCase: 永続化済みメッセージの配送（MessageRouter）
//!
//! 受信者がレジストリに存在すればその接続へ即座に送信し、存在しなければ何もしません
//! （受信者は後で履歴取得によって受け取ります）。
//! 送信は fire-and-forget で、確認応答・再送はありません。
//!
//! `route` は HistoryStore への保存が完了したメッセージに対してのみ呼び出されます。

use std::sync::Arc;

use crate::domain::{ConnectionRegistry, Message, MessagePusher, ServerEvent, UserId};

use super::broadcast_presence::evict_stale_connection;

/// What happened to a routed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Pushed to the receiver's live connection.
    Pushed,
    /// Receiver offline (or its connection was stale); the store is the only copy.
    Stored,
}

pub struct MessageRouter {
    registry: Arc<dyn ConnectionRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl MessageRouter {
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// Deliver a persisted message to its receiver if the receiver is online.
    pub async fn route(&self, message: &Message) -> RouteOutcome {
        let outcome = self
            .push_to_user(&message.receiver_id, ServerEvent::NewMessage(message.clone()))
            .await;
        match outcome {
            RouteOutcome::Pushed => tracing::info!(
                "Message {} pushed to online receiver '{}'",
                message.id,
                message.receiver_id
            ),
            RouteOutcome::Stored => tracing::info!(
                "Receiver '{}' is offline, message {} kept for history",
                message.receiver_id,
                message.id
            ),
        }
        outcome
    }

    /// Forward an unpersisted client payload to `receiver_id` as a `newMessage`.
    pub async fn relay(&self, receiver_id: &UserId, payload: serde_json::Value) -> RouteOutcome {
        let outcome = self
            .push_to_user(receiver_id, ServerEvent::Relayed(payload))
            .await;
        tracing::debug!("Relay to '{}': {:?}", receiver_id, outcome);
        outcome
    }

    async fn push_to_user(&self, receiver_id: &UserId, event: ServerEvent) -> RouteOutcome {
        let Some(connection_id) = self.registry.lookup(receiver_id).await else {
            return RouteOutcome::Stored;
        };

        match self.message_pusher.push_to(&connection_id, &event).await {
            Ok(()) => RouteOutcome::Pushed,
            Err(e) => {
                tracing::warn!(
                    "Failed to push '{}' to '{}' on connection {}: {}",
                    event.name(),
                    receiver_id,
                    connection_id,
                    e
                );
                evict_stale_connection(
                    self.registry.as_ref(),
                    self.message_pusher.as_ref(),
                    &connection_id,
                )
                .await;
                RouteOutcome::Stored
            }
        }
    }
}
