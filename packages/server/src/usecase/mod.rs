//! UseCase layer
//!
//! presence 管理・メッセージ配送の中核（PresenceBroadcaster, MessageRouter,
//! ConnectionLifecycle）と、REST API のユースケースを提供します。

pub mod authenticate;
pub mod broadcast_presence;
pub mod connection_lifecycle;
pub mod error;
pub mod get_conversation;
pub mod list_sidebar_users;
pub mod login;
pub mod route_message;
pub mod send_message;
pub mod signup;
pub mod update_profile;

pub use authenticate::AuthenticateUseCase;
pub use broadcast_presence::PresenceBroadcaster;
pub use connection_lifecycle::ConnectionLifecycle;
pub use error::{
    AuthenticateError, LoginError, SendMessageError, SignupError, UpdateProfileError,
};
pub use get_conversation::GetConversationUseCase;
pub use list_sidebar_users::{ListSidebarUsersUseCase, SidebarUser};
pub use login::{LoginInput, LoginUseCase};
pub use route_message::{MessageRouter, RouteOutcome};
pub use send_message::{SendMessageInput, SendMessageUseCase};
pub use signup::{SignupInput, SignupUseCase};
pub use update_profile::UpdateProfileUseCase;
