//! Repository trait 定義
//!
//! 永続化層へのインターフェース。UseCase 層はこの trait に依存し、
//! Infrastructure 層の具体的な実装には依存しません。

use async_trait::async_trait;

use super::{
    entity::{Message, NewMessage, NewUser, User},
    error::RepositoryError,
    value_object::{Email, ImageUrl, UserId},
};

/// HistoryStore: durable, append-only record of direct messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a message and return it with its assigned id and timestamp.
    /// Returning `Ok` means the message is durable.
    async fn save(&self, message: NewMessage) -> Result<Message, RepositoryError>;

    /// Every message exchanged between `a` and `b` in either direction, in
    /// persistence order. Symmetric in its arguments.
    async fn find_conversation(
        &self,
        a: &UserId,
        b: &UserId,
    ) -> Result<Vec<Message>, RepositoryError>;
}

/// Account storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create an account. Fails with `DuplicateEmail` if the email is taken.
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Every user except `id`, in registration order.
    async fn list_except(&self, id: &UserId) -> Result<Vec<User>, RepositoryError>;

    async fn update_profile_pic(
        &self,
        id: &UserId,
        profile_pic: ImageUrl,
    ) -> Result<User, RepositoryError>;
}
