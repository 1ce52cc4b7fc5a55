//! Server state shared by every handler.

use std::{sync::Arc, time::Instant};

use crate::usecase::{
    AuthenticateUseCase, ConnectionLifecycle, GetConversationUseCase, ListSidebarUsersUseCase,
    LoginUseCase, MessageRouter, SendMessageUseCase, SignupUseCase, UpdateProfileUseCase,
};

use super::cookie::CookiePolicy;

/// Shared application state
pub struct AppState {
    /// ConnectionLifecycle（WebSocket 接続の開始・終了）
    pub connection_lifecycle: Arc<ConnectionLifecycle>,
    /// MessageRouter（relayMessage の中継に使用）
    pub message_router: Arc<MessageRouter>,
    pub signup_usecase: Arc<SignupUseCase>,
    pub login_usecase: Arc<LoginUseCase>,
    pub authenticate_usecase: Arc<AuthenticateUseCase>,
    pub update_profile_usecase: Arc<UpdateProfileUseCase>,
    pub list_sidebar_users_usecase: Arc<ListSidebarUsersUseCase>,
    pub get_conversation_usecase: Arc<GetConversationUseCase>,
    pub send_message_usecase: Arc<SendMessageUseCase>,
    pub cookie_policy: CookiePolicy,
    /// ヘルスチェックの uptime 計算用
    pub started_at: Instant,
}
