//! UseCase: セッショントークンの検証
//!
//! HTTP の保護ルートでは `execute` でユーザーまで解決し、
//! WebSocket のハンドシェイクでは `identify` でトークンの主体だけを取り出します。

use std::sync::Arc;

use crate::domain::{TokenService, User, UserId, UserRepository};

use super::error::AuthenticateError;

pub struct AuthenticateUseCase {
    token_service: Arc<dyn TokenService>,
    user_repository: Arc<dyn UserRepository>,
}

impl AuthenticateUseCase {
    pub fn new(
        token_service: Arc<dyn TokenService>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            token_service,
            user_repository,
        }
    }

    /// Resolve a session token to its (still existing) user.
    pub async fn execute(&self, token: &str) -> Result<User, AuthenticateError> {
        let user_id = self
            .token_service
            .verify(token)
            .map_err(|_| AuthenticateError::InvalidToken)?;

        self.user_repository
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthenticateError::UserNotFound)
    }

    /// Subject of a valid token, `None` otherwise.
    pub fn identify(&self, token: &str) -> Option<UserId> {
        self.token_service.verify(token).ok()
    }
}
