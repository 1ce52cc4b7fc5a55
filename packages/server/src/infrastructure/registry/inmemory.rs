//! InMemory ConnectionRegistry 実装
//!
//! UserId → ConnectionId と ConnectionId → UserId の 2 つのマップを
//! 単一の Mutex で保護し、登録・削除・参照を互いにアトミックに行います。
//! ロック内では送信を行いません（送信は MessagePusher がロック外で行う）。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, ConnectionRegistry, UserId};

#[derive(Debug, Default)]
struct Entries {
    by_user: HashMap<UserId, ConnectionId>,
    by_connection: HashMap<ConnectionId, UserId>,
}

/// Process-local registry, created at server start and injected where needed.
#[derive(Debug, Default)]
pub struct InMemoryConnectionRegistry {
    entries: Mutex<Entries>,
}

impl InMemoryConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, user_id: UserId, handle: ConnectionId) -> Option<ConnectionId> {
        let mut entries = self.entries.lock().await;

        // The same handle re-registered under another id must not leave a dangling entry.
        if let Some(previous_user) = entries.by_connection.remove(&handle) {
            if previous_user != user_id {
                entries.by_user.remove(&previous_user);
            }
        }

        let displaced = entries.by_user.insert(user_id.clone(), handle);
        if let Some(old) = displaced {
            entries.by_connection.remove(&old);
        }
        entries.by_connection.insert(handle, user_id.clone());

        tracing::debug!(
            "User '{}' registered on connection {} (displaced: {:?})",
            user_id,
            handle,
            displaced
        );
        displaced.filter(|old| *old != handle)
    }

    async fn unregister(&self, handle: &ConnectionId) -> Option<UserId> {
        let mut entries = self.entries.lock().await;
        let user_id = entries.by_connection.remove(handle)?;
        if entries.by_user.get(&user_id) == Some(handle) {
            entries.by_user.remove(&user_id);
        }
        tracing::debug!("User '{}' unregistered from connection {}", user_id, handle);
        Some(user_id)
    }

    async fn lookup(&self, user_id: &UserId) -> Option<ConnectionId> {
        self.entries.lock().await.by_user.get(user_id).copied()
    }

    async fn snapshot(&self) -> Vec<UserId> {
        let entries = self.entries.lock().await;
        let mut users: Vec<UserId> = entries.by_user.keys().cloned().collect();
        users.sort();
        users
    }
}
