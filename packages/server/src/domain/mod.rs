//! Domain layer
//!
//! エンティティ・値オブジェクト・接続状態機械と、外部協調者へのインターフェース
//! （trait）を定義します。具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

pub mod auth;
pub mod connection;
pub mod entity;
pub mod error;
pub mod event;
pub mod media;
pub mod pusher;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use auth::{PasswordHasher, TokenService};
pub use connection::{ConnectionSession, ConnectionState};
pub use entity::{Message, NewMessage, NewUser, User};
pub use error::{AuthError, MediaError, MessagePushError, RepositoryError, ValueObjectError};
pub use event::ServerEvent;
pub use media::MediaStore;
pub use pusher::{MessagePusher, PusherChannel};
pub use registry::ConnectionRegistry;
pub use repository::{MessageRepository, UserRepository};
pub use value_object::{
    ConnectionId, Email, FullName, ImageUrl, MessageId, MessageText, Password, Timestamp, UserId,
};
