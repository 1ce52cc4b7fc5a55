//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{AuthError, RepositoryError, ValueObjectError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("All fields are required")]
    MissingFields,

    #[error(transparent)]
    Invalid(#[from] ValueObjectError),

    #[error("Email already exists")]
    EmailTaken,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Error creating user account: {0}")]
    Repository(RepositoryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Email and password are required")]
    MissingFields,

    /// Unknown email and wrong password are indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthenticateError {
    #[error("Unauthorized - Invalid or expired token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateProfileError {
    #[error("Profile data is required")]
    MissingProfilePic,

    #[error("Failed to upload image: {0}")]
    UploadFailed(String),

    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Repository(RepositoryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("Message must contain text or an image")]
    EmptyMessage,

    #[error("Invalid receiver id")]
    InvalidReceiver,

    #[error("Failed to upload image: {0}")]
    UploadFailed(String),

    /// The only failure visible to the sender; routing never fails a send.
    #[error("Failed to persist message: {0}")]
    PersistenceFailed(#[from] RepositoryError),
}
