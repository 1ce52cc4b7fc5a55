//! UseCase: ログイン
//!
//! メールアドレスとパスワードを照合し、セッショントークンを発行します。
//! 未登録のメールアドレスとパスワード不一致は区別せずに `InvalidCredentials` を返します。

use std::sync::Arc;

use crate::domain::{Email, Password, PasswordHasher, TokenService, User, UserRepository};

use super::error::LoginError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
}

impl LoginUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> Result<(User, String), LoginError> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        let email = Email::new(input.email).map_err(|_| LoginError::InvalidCredentials)?;
        let password = Password::new(input.password).map_err(|_| LoginError::InvalidCredentials)?;

        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        if !self.password_hasher.verify(&password, &user.password_hash) {
            tracing::debug!("Password mismatch for '{}'", user.id);
            return Err(LoginError::InvalidCredentials);
        }

        let token = self.token_service.issue(&user.id)?;
        tracing::info!("User '{}' logged in", user.id);
        Ok((user, token))
    }
}
