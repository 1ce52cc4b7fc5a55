//! UseCase: presence のブロードキャスト
//!
//! レジストリの現在のスナップショットを、匿名接続を含む**全接続**へ送信します。
//! 差分ではなく全量を送るため、1 回の変更につき O(接続数) のコストがかかります
//! （少数接続を前提としたスケーリング上の制約）。
//!
//! 連続した変更の通知がクライアントごとに前後することはありますが、
//! 送られるのは常に「現在の集合」なので次の通知で収束します。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, MessagePusher, ServerEvent, UserId};

pub struct PresenceBroadcaster {
    registry: Arc<dyn ConnectionRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl PresenceBroadcaster {
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// Push the current online set to every connection. Returns the snapshot sent.
    pub async fn announce(&self) -> Vec<UserId> {
        let snapshot = self.registry.snapshot().await;
        let event = ServerEvent::OnlineUsers(snapshot.clone());

        let failed = self.message_pusher.broadcast(&event).await;
        for connection_id in failed {
            evict_stale_connection(
                self.registry.as_ref(),
                self.message_pusher.as_ref(),
                &connection_id,
            )
            .await;
        }

        tracing::info!("Announced {} online user(s)", snapshot.len());
        snapshot
    }

    /// Push the current online set to a single connection (used to bring an
    /// anonymous connection up to date without a global announce).
    pub async fn send_snapshot_to(&self, connection_id: &ConnectionId) {
        let event = ServerEvent::OnlineUsers(self.registry.snapshot().await);
        if let Err(e) = self.message_pusher.push_to(connection_id, &event).await {
            tracing::warn!("Failed to send presence to connection {}: {}", connection_id, e);
            evict_stale_connection(
                self.registry.as_ref(),
                self.message_pusher.as_ref(),
                connection_id,
            )
            .await;
        }
    }
}

/// Drop a connection whose channel refused a push. No retry.
///
/// The connection's own teardown still runs when its socket task ends and is
/// the one that re-announces presence.
pub(crate) async fn evict_stale_connection(
    registry: &dyn ConnectionRegistry,
    message_pusher: &dyn MessagePusher,
    connection_id: &ConnectionId,
) {
    let user_id = registry.unregister(connection_id).await;
    message_pusher.unregister_client(connection_id).await;
    match user_id {
        Some(user_id) => tracing::warn!(
            "Evicted stale connection {} of user '{}'",
            connection_id,
            user_id
        ),
        None => tracing::warn!("Evicted stale connection {}", connection_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MessagePushError, pusher::MockMessagePusher, registry::MockConnectionRegistry},
        infrastructure::{
            message_pusher::WebSocketMessagePusher, registry::InMemoryConnectionRegistry,
        },
    };
    use mockall::predicate::eq;
    use tokio::sync::mpsc;

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_announce_reaches_registered_and_anonymous_connections() {
        // テスト項目: 登録済み・匿名を問わず全接続に現在のオンライン集合が送られる
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let pusher = Arc::new(WebSocketMessagePusher::default());
        let broadcaster = PresenceBroadcaster::new(registry.clone(), pusher.clone());

        let alice = ConnectionId::generate();
        let anonymous = ConnectionId::generate();
        let (alice_tx, mut alice_rx) = mpsc::unbounded_channel();
        let (anon_tx, mut anon_rx) = mpsc::unbounded_channel();
        pusher.register_client(alice, alice_tx).await;
        pusher.register_client(anonymous, anon_tx).await;
        registry.register(user("alice"), alice).await;

        // when (操作):
        let snapshot = broadcaster.announce().await;

        // then (期待する結果):
        assert_eq!(snapshot, vec![user("alice")]);
        let expected = r#"{"type":"getOnlineUsers","payload":["alice"]}"#.to_string();
        assert_eq!(alice_rx.recv().await, Some(expected.clone()));
        assert_eq!(anon_rx.recv().await, Some(expected));
    }

    #[tokio::test]
    async fn test_announce_evicts_connections_that_failed() {
        // テスト項目: 送信に失敗した接続はレジストリと送信先の両方から削除される
        // given (前提条件):
        let stale = ConnectionId::generate();
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_snapshot()
            .times(1)
            .returning(|| vec![UserId::new("bob".to_string()).unwrap()]);
        registry
            .expect_unregister()
            .with(eq(stale))
            .times(1)
            .returning(|_| Some(UserId::new("bob".to_string()).unwrap()));

        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_broadcast()
            .times(1)
            .returning(move |_| vec![stale]);
        pusher
            .expect_unregister_client()
            .with(eq(stale))
            .times(1)
            .returning(|_| true);

        let broadcaster = PresenceBroadcaster::new(Arc::new(registry), Arc::new(pusher));

        // when (操作):
        let snapshot = broadcaster.announce().await;

        // then (期待する結果): モックの期待回数で検証
        assert_eq!(snapshot, vec![user("bob")]);
    }

    #[tokio::test]
    async fn test_send_snapshot_to_single_connection() {
        // テスト項目: 指定した 1 接続にだけスナップショットが送られる
        // given (前提条件):
        let target = ConnectionId::generate();
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_snapshot()
            .returning(|| vec![UserId::new("alice".to_string()).unwrap()]);
        registry.expect_unregister().never();

        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_push_to()
            .withf(move |id, event| {
                *id == target
                    && *event == ServerEvent::OnlineUsers(vec![
                        UserId::new("alice".to_string()).unwrap(),
                    ])
            })
            .times(1)
            .returning(|_, _| Ok(()));
        pusher.expect_broadcast().never();

        let broadcaster = PresenceBroadcaster::new(Arc::new(registry), Arc::new(pusher));

        // when (操作):
        broadcaster.send_snapshot_to(&target).await;

        // then (期待する結果): モックの期待回数で検証
    }

    #[tokio::test]
    async fn test_send_snapshot_failure_evicts_connection() {
        // テスト項目: 単一接続への送信失敗でもその接続が削除される
        // given (前提条件):
        let target = ConnectionId::generate();
        let mut registry = MockConnectionRegistry::new();
        registry.expect_snapshot().returning(Vec::new);
        registry
            .expect_unregister()
            .with(eq(target))
            .times(1)
            .returning(|_| None);

        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_push_to()
            .returning(|_, _| Err(MessagePushError::PushFailed("closed".to_string())));
        pusher
            .expect_unregister_client()
            .with(eq(target))
            .times(1)
            .returning(|_| true);

        let broadcaster = PresenceBroadcaster::new(Arc::new(registry), Arc::new(pusher));

        // when (操作):
        broadcaster.send_snapshot_to(&target).await;

        // then (期待する結果): モックの期待回数で検証
    }
}
