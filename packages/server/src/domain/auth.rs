//! Identity collaborators: password hashing and session tokens.

use super::{error::AuthError, value_object::{Password, UserId}};

#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &Password) -> Result<String, AuthError>;

    /// `false` on mismatch and on malformed hashes.
    fn verify(&self, password: &Password, hash: &str) -> bool;
}

#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Issue a session token whose subject is `user_id`.
    fn issue(&self, user_id: &UserId) -> Result<String, AuthError>;

    /// Verify a token and return its subject.
    fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}
