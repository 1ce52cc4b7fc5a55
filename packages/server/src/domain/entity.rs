//! エンティティ
//!
//! `User` と `Message` を定義します。`Message` は生成後に変更されません。

use super::value_object::{
    Email, FullName, ImageUrl, MessageId, MessageText, Timestamp, UserId,
};

/// Registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub full_name: FullName,
    pub email: Email,
    /// bcrypt hash; never leaves the server.
    pub password_hash: String,
    /// Empty until the user uploads one.
    pub profile_pic: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: FullName,
    pub email: Email,
    pub password_hash: String,
}

impl User {
    pub fn create(new_user: NewUser, now: Timestamp) -> Self {
        Self {
            id: UserId::generate(),
            full_name: new_user.full_name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            profile_pic: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A direct message that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub text: Option<MessageText>,
    pub image_url: Option<ImageUrl>,
}

/// A persisted direct message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub text: Option<MessageText>,
    pub image_url: Option<ImageUrl>,
    pub created_at: Timestamp,
}

impl Message {
    /// Assign identity and creation time to a pending message.
    pub fn persist(new_message: NewMessage, created_at: Timestamp) -> Self {
        Self {
            id: MessageId::generate(),
            sender_id: new_message.sender_id,
            receiver_id: new_message.receiver_id,
            text: new_message.text,
            image_url: new_message.image_url,
            created_at,
        }
    }

    /// Whether this message belongs to the conversation between `a` and `b`
    /// (either direction).
    pub fn is_between(&self, a: &UserId, b: &UserId) -> bool {
        (&self.sender_id == a && &self.receiver_id == b)
            || (&self.sender_id == b && &self.receiver_id == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_id(value: &str) -> UserId {
        UserId::new(value.to_string()).unwrap()
    }

    fn message(from: &str, to: &str) -> Message {
        Message::persist(
            NewMessage {
                sender_id: user_id(from),
                receiver_id: user_id(to),
                text: Some(MessageText::new("hi".to_string()).unwrap()),
                image_url: None,
            },
            Timestamp::new(1000),
        )
    }

    #[test]
    fn test_is_between_is_symmetric() {
        // テスト項目: 会話判定は送信方向に依存しない
        // given (前提条件):
        let alice = user_id("alice");
        let bob = user_id("bob");
        let a_to_b = message("alice", "bob");
        let b_to_a = message("bob", "alice");

        // when / then (操作・期待する結果):
        assert!(a_to_b.is_between(&alice, &bob));
        assert!(a_to_b.is_between(&bob, &alice));
        assert!(b_to_a.is_between(&alice, &bob));
        assert!(b_to_a.is_between(&bob, &alice));
    }

    #[test]
    fn test_is_between_excludes_third_party() {
        // テスト項目: 第三者が関わるメッセージは会話に含まれない
        // given (前提条件):
        let alice = user_id("alice");
        let bob = user_id("bob");
        let a_to_c = message("alice", "charlie");

        // when / then (操作・期待する結果):
        assert!(!a_to_c.is_between(&alice, &bob));
    }

    #[test]
    fn test_create_user_starts_without_profile_pic() {
        // テスト項目: 新規ユーザーはプロフィール画像なし・作成時刻と更新時刻が一致する
        // given (前提条件):
        let new_user = NewUser {
            full_name: FullName::new("Alice".to_string()).unwrap(),
            email: Email::new("alice@example.com".to_string()).unwrap(),
            password_hash: "hash".to_string(),
        };

        // when (操作):
        let user = User::create(new_user, Timestamp::new(42));

        // then (期待する結果):
        assert!(user.profile_pic.is_empty());
        assert_eq!(user.created_at, Timestamp::new(42));
        assert_eq!(user.updated_at, Timestamp::new(42));
    }
}
