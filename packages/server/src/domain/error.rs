//! Domain error types.

use thiserror::Error;

/// Validation errors raised while constructing value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("User ID must not be empty")]
    EmptyUserId,

    #[error("Email is required")]
    EmptyEmail,

    #[error("Please provide a valid email address: '{0}'")]
    InvalidEmail(String),

    #[error("Full name is required")]
    EmptyFullName,

    #[error("Password is required")]
    EmptyPassword,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Message text must not be empty")]
    EmptyMessageText,

    #[error("Image URL must not be empty")]
    EmptyImageUrl,
}

/// Errors raised by persistence collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Email already exists: '{0}'")]
    DuplicateEmail(String),

    #[error("User not found: '{0}'")]
    UserNotFound(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised when pushing an event to a single connection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("Connection '{0}' not found")]
    ConnectionNotFound(String),

    #[error("Failed to push message: {0}")]
    PushFailed(String),

    #[error("Failed to encode event: {0}")]
    EncodeFailed(String),
}

/// Errors raised by the media collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("Invalid image payload: {0}")]
    InvalidPayload(String),

    #[error("Failed to store image: {0}")]
    StorageFailed(String),
}

/// Errors raised by the identity collaborators (password hashing, tokens).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Failed to hash password: {0}")]
    HashFailed(String),

    #[error("Failed to issue token: {0}")]
    TokenIssueFailed(String),

    #[error("Invalid or expired token")]
    InvalidToken,
}
