//! UseCase: 会話履歴の取得
//!
//! 2 ユーザー間のメッセージを両方向まとめて保存順に返します。

use std::sync::Arc;

use crate::domain::{Message, MessageRepository, RepositoryError, UserId};

pub struct GetConversationUseCase {
    message_repository: Arc<dyn MessageRepository>,
}

impl GetConversationUseCase {
    pub fn new(message_repository: Arc<dyn MessageRepository>) -> Self {
        Self { message_repository }
    }

    pub async fn execute(
        &self,
        me: &UserId,
        other: &UserId,
    ) -> Result<Vec<Message>, RepositoryError> {
        self.message_repository.find_conversation(me, other).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MessageText, NewMessage},
        infrastructure::repository::InMemoryMessageRepository,
    };
    use tayori_shared::time::FixedClock;

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    async fn save(repository: &InMemoryMessageRepository, from: &str, to: &str, text: &str) {
        repository
            .save(NewMessage {
                sender_id: user(from),
                receiver_id: user(to),
                text: Some(MessageText::new(text.to_string()).unwrap()),
                image_url: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_conversation_is_symmetric() {
        // テスト項目: 会話履歴はどちら側から取得しても同じ内容・同じ順序になる
        // given (前提条件):
        let repository = Arc::new(InMemoryMessageRepository::new(Arc::new(FixedClock::new(0))));
        save(&repository, "alice", "bob", "hi").await;
        save(&repository, "bob", "alice", "hey").await;
        save(&repository, "alice", "carol", "unrelated").await;
        let usecase = GetConversationUseCase::new(repository.clone());

        // when (操作):
        let from_alice = usecase.execute(&user("alice"), &user("bob")).await.unwrap();
        let from_bob = usecase.execute(&user("bob"), &user("alice")).await.unwrap();

        // then (期待する結果):
        assert_eq!(from_alice.len(), 2);
        assert_eq!(from_alice, from_bob);
        assert_eq!(
            from_alice[0].text.as_ref().map(MessageText::as_str),
            Some("hi")
        );
        assert_eq!(
            from_alice[1].text.as_ref().map(MessageText::as_str),
            Some("hey")
        );
    }

    #[tokio::test]
    async fn test_conversation_without_messages_is_empty() {
        // テスト項目: やり取りのない相手との履歴は空
        // given (前提条件):
        let repository = Arc::new(InMemoryMessageRepository::new(Arc::new(FixedClock::new(0))));
        let usecase = GetConversationUseCase::new(repository);

        // when (操作):
        let result = usecase.execute(&user("alice"), &user("bob")).await;

        // then (期待する結果):
        assert_eq!(result, Ok(vec![]));
    }
}
