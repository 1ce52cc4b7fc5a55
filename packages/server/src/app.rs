//! Dependency wiring.
//!
//! Infrastructure 実装を生成し、UseCase に注入して `Server` を組み立てます。

use std::{collections::HashMap, sync::Arc, time::Instant};

use tayori_shared::time::Clock;
use tokio::sync::Mutex;

use crate::{
    config::ServerConfig,
    infrastructure::{
        auth::{BcryptPasswordHasher, JwtTokenService},
        media::LocalMediaStore,
        message_pusher::WebSocketMessagePusher,
        registry::InMemoryConnectionRegistry,
        repository::{InMemoryMessageRepository, InMemoryUserRepository},
    },
    ui::{AppState, CookiePolicy, Server, ServerSettings},
    usecase::{
        AuthenticateUseCase, ConnectionLifecycle, GetConversationUseCase,
        ListSidebarUsersUseCase, LoginUseCase, MessageRouter, PresenceBroadcaster,
        SendMessageUseCase, SignupUseCase, UpdateProfileUseCase,
    },
};

/// Build a ready-to-run server from `config`.
///
/// `password_cost` is the bcrypt cost; tests pass a low one.
pub fn build_server(config: &ServerConfig, clock: Arc<dyn Clock>, password_cost: u32) -> Server {
    // Initialize dependencies in order:
    // 1. Repositories (users, message history)
    // 2. ConnectionRegistry / MessagePusher
    // 3. Identity and media collaborators
    // 4. Core services and UseCases
    // 5. AppState and Server

    // 1. Create Repositories (in-memory database)
    let user_repository = Arc::new(InMemoryUserRepository::new(clock.clone()));
    let message_repository = Arc::new(InMemoryMessageRepository::new(clock.clone()));

    // 2. Create ConnectionRegistry and MessagePusher (WebSocket implementation)
    let registry = Arc::new(InMemoryConnectionRegistry::new());
    let message_pusher_clients = Arc::new(Mutex::new(HashMap::new()));
    let message_pusher = Arc::new(WebSocketMessagePusher::new(message_pusher_clients));

    // 3. Create identity and media collaborators
    let password_hasher = Arc::new(BcryptPasswordHasher::new(password_cost));
    let token_service = Arc::new(JwtTokenService::new(config.jwt_secret.as_bytes(), clock));
    let media_store = Arc::new(LocalMediaStore::new(
        config.media_dir.clone(),
        config.public_url(),
    ));

    // 4. Create core services and UseCases
    let presence = Arc::new(PresenceBroadcaster::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let message_router = Arc::new(MessageRouter::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let connection_lifecycle = Arc::new(ConnectionLifecycle::new(
        registry.clone(),
        message_pusher.clone(),
        presence,
    ));
    let signup_usecase = Arc::new(SignupUseCase::new(
        user_repository.clone(),
        password_hasher.clone(),
        token_service.clone(),
    ));
    let login_usecase = Arc::new(LoginUseCase::new(
        user_repository.clone(),
        password_hasher,
        token_service.clone(),
    ));
    let authenticate_usecase = Arc::new(AuthenticateUseCase::new(
        token_service,
        user_repository.clone(),
    ));
    let update_profile_usecase = Arc::new(UpdateProfileUseCase::new(
        user_repository.clone(),
        media_store.clone(),
    ));
    let list_sidebar_users_usecase = Arc::new(ListSidebarUsersUseCase::new(
        user_repository,
        registry,
    ));
    let get_conversation_usecase = Arc::new(GetConversationUseCase::new(
        message_repository.clone(),
    ));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        message_repository,
        media_store,
        message_router.clone(),
    ));

    // 5. Create the server
    let state = AppState {
        connection_lifecycle,
        message_router,
        signup_usecase,
        login_usecase,
        authenticate_usecase,
        update_profile_usecase,
        list_sidebar_users_usecase,
        get_conversation_usecase,
        send_message_usecase,
        cookie_policy: CookiePolicy::new(config.production),
        started_at: Instant::now(),
    };
    let settings = ServerSettings {
        cors_origins: config.allowed_origins(),
        body_limit: config.body_limit,
        media_dir: config.media_dir.clone(),
    };
    Server::new(state, settings)
}
