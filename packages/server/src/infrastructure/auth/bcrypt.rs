//! bcrypt を使った PasswordHasher 実装

use crate::domain::{AuthError, Password, PasswordHasher};

/// Cost used by the server binary.
pub const DEFAULT_COST: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &Password) -> Result<String, AuthError> {
        ::bcrypt::hash(password.as_str(), self.cost).map_err(|e| AuthError::HashFailed(e.to_string()))
    }

    fn verify(&self, password: &Password, hash: &str) -> bool {
        ::bcrypt::verify(password.as_str(), hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new(4) // bcrypt::MIN_COST (private in bcrypt 0.17)
    }

    fn password(value: &str) -> Password {
        Password::new(value.to_string()).unwrap()
    }

    #[test]
    fn test_hash_then_verify() {
        // テスト項目: ハッシュ化したパスワードを検証でき、別のパスワードは一致しない
        // given (前提条件):
        let hasher = hasher();
        let hash = hasher.hash(&password("correct horse")).unwrap();

        // when / then (操作・期待する結果):
        assert_ne!(hash, "correct horse");
        assert!(hasher.verify(&password("correct horse"), &hash));
        assert!(!hasher.verify(&password("battery staple"), &hash));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        // テスト項目: 壊れたハッシュとの照合はエラーではなく false になる
        // given (前提条件):
        let hasher = hasher();

        // when (操作):
        let result = hasher.verify(&password("whatever"), "not-a-bcrypt-hash");

        // then (期待する結果):
        assert!(!result);
    }
}
