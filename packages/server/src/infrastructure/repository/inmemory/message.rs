//! InMemory Message Repository 実装
//!
//! `Vec` を追記専用ログとして使い、挿入順（= 永続化順）を保持します。

use std::sync::Arc;

use async_trait::async_trait;
use tayori_shared::time::Clock;
use tokio::sync::Mutex;

use crate::domain::{Message, MessageRepository, NewMessage, RepositoryError, Timestamp, UserId};

pub struct InMemoryMessageRepository {
    messages: Mutex<Vec<Message>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryMessageRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            clock,
        }
    }

    pub async fn count(&self) -> usize {
        self.messages.lock().await.len()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn save(&self, message: NewMessage) -> Result<Message, RepositoryError> {
        let persisted = Message::persist(message, Timestamp::new(self.clock.now_millis()));
        self.messages.lock().await.push(persisted.clone());
        Ok(persisted)
    }

    async fn find_conversation(
        &self,
        a: &UserId,
        b: &UserId,
    ) -> Result<Vec<Message>, RepositoryError> {
        let messages = self.messages.lock().await;
        Ok(messages
            .iter()
            .filter(|m| m.is_between(a, b))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageText;
    use tayori_shared::time::FixedClock;

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    fn text_message(from: &str, to: &str, text: &str) -> NewMessage {
        NewMessage {
            sender_id: user(from),
            receiver_id: user(to),
            text: Some(MessageText::new(text.to_string()).unwrap()),
            image_url: None,
        }
    }

    fn texts(messages: &[Message]) -> Vec<&str> {
        messages
            .iter()
            .filter_map(|m| m.text.as_ref().map(MessageText::as_str))
            .collect()
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_timestamp() {
        // テスト項目: 保存時に ID と作成時刻が付与される
        // given (前提条件):
        let repo = InMemoryMessageRepository::new(Arc::new(FixedClock::new(5000)));

        // when (操作):
        let first = repo.save(text_message("alice", "bob", "1")).await.unwrap();
        let second = repo.save(text_message("alice", "bob", "2")).await.unwrap();

        // then (期待する結果):
        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, Timestamp::new(5000));
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_find_conversation_is_bidirectional_in_persistence_order() {
        // テスト項目: 会話取得は双方向のメッセージを永続化順に交互に返す
        // given (前提条件):
        let repo = InMemoryMessageRepository::new(Arc::new(FixedClock::new(0)));
        repo.save(text_message("alice", "bob", "a1")).await.unwrap();
        repo.save(text_message("bob", "alice", "b1")).await.unwrap();
        repo.save(text_message("alice", "charlie", "c1")).await.unwrap();
        repo.save(text_message("alice", "bob", "a2")).await.unwrap();

        // when (操作):
        let result = repo
            .find_conversation(&user("alice"), &user("bob"))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(texts(&result), vec!["a1", "b1", "a2"]);
    }

    #[tokio::test]
    async fn test_find_conversation_is_symmetric() {
        // テスト項目: 引数の順序を入れ替えても同じ結果になる
        // given (前提条件):
        let repo = InMemoryMessageRepository::new(Arc::new(FixedClock::new(0)));
        repo.save(text_message("alice", "bob", "a1")).await.unwrap();
        repo.save(text_message("bob", "alice", "b1")).await.unwrap();

        // when (操作):
        let ab = repo
            .find_conversation(&user("alice"), &user("bob"))
            .await
            .unwrap();
        let ba = repo
            .find_conversation(&user("bob"), &user("alice"))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(ab, ba);
    }

    #[tokio::test]
    async fn test_find_conversation_without_messages_is_empty() {
        // テスト項目: メッセージのない組み合わせは空リストになる
        // given (前提条件):
        let repo = InMemoryMessageRepository::new(Arc::new(FixedClock::new(0)));

        // when (操作):
        let result = repo
            .find_conversation(&user("alice"), &user("bob"))
            .await
            .unwrap();

        // then (期待する結果):
        assert!(result.is_empty());
    }
}
