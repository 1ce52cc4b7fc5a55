//! UseCase: アカウント登録
//!
//! 1. 入力検証（全項目必須・パスワード長・メール形式）
//! 2. メールアドレスの重複確認
//! 3. パスワードをハッシュ化してユーザーを作成
//! 4. セッショントークンを発行

use std::sync::Arc;

use crate::domain::{
    Email, FullName, NewUser, Password, PasswordHasher, RepositoryError, TokenService, User,
    UserRepository,
};

use super::error::SignupError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

pub struct SignupUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
}

impl SignupUseCase {
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

    /// Create an account and return it with a freshly issued session token.
    pub async fn execute(&self, input: SignupInput) -> Result<(User, String), SignupError> {
        if [&input.full_name, &input.email, &input.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(SignupError::MissingFields);
        }

        let password = Password::new(input.password)?;
        let email = Email::new(input.email)?;
        let full_name = FullName::new(input.full_name)?;

        if self
            .user_repository
            .find_by_email(&email)
            .await
            .map_err(SignupError::Repository)?
            .is_some()
        {
            return Err(SignupError::EmailTaken);
        }

        let password_hash = self.password_hasher.hash(&password)?;
        let user = self
            .user_repository
            .create(NewUser {
                full_name,
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                // 確認から作成までの間に同じメールで登録された場合
                RepositoryError::DuplicateEmail(_) => SignupError::EmailTaken,
                other => SignupError::Repository(other),
            })?;

        let token = self.token_service.issue(&user.id)?;
        tracing::info!("User '{}' signed up", user.id);
        Ok((user, token))
    }
}
