//! JWT (HS256) を使った TokenService 実装

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tayori_shared::time::Clock;

use crate::domain::{AuthError, TokenService, UserId};

/// Session lifetime: 7 days.
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    /// UserId
    sub: String,
    iat: i64,
    exp: i64,
}

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    clock: Arc<dyn Clock>,
}

impl JwtTokenService {
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            clock,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: &UserId) -> Result<String, AuthError> {
        let now = self.clock.now_millis() / 1000;
        let claims = Claims {
            sub: user_id.as_str().to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenIssueFailed(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Rejected session token: {}", e);
            AuthError::InvalidToken
        })?;
        UserId::new(data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tayori_shared::time::{FixedClock, SystemClock};

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    #[test]
    fn test_issue_then_verify() {
        // テスト項目: 発行したトークンから UserId を取り出せる
        // given (前提条件):
        let service = JwtTokenService::new(b"test-secret", Arc::new(SystemClock));

        // when (操作):
        let token = service.issue(&user("alice")).unwrap();
        let result = service.verify(&token);

        // then (期待する結果):
        assert_eq!(result, Ok(user("alice")));
    }

    #[test]
    fn test_verify_with_other_secret_fails() {
        // テスト項目: 別の秘密鍵で署名されたトークンは拒否される
        // given (前提条件):
        let issuer = JwtTokenService::new(b"secret-a", Arc::new(SystemClock));
        let verifier = JwtTokenService::new(b"secret-b", Arc::new(SystemClock));
        let token = issuer.issue(&user("alice")).unwrap();

        // when (操作):
        let result = verifier.verify(&token);

        // then (期待する結果):
        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // テスト項目: 有効期限切れのトークンは拒否される
        // given (前提条件): 1970 年に発行されたトークン
        let service = JwtTokenService::new(b"test-secret", Arc::new(FixedClock::new(0)));
        let token = service.issue(&user("alice")).unwrap();

        // when (操作):
        let result = service.verify(&token);

        // then (期待する結果):
        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        // テスト項目: JWT 形式でない文字列は拒否される
        // given (前提条件):
        let service = JwtTokenService::new(b"test-secret", Arc::new(SystemClock));

        // when (操作):
        let result = service.verify("not.a.jwt");

        // then (期待する結果):
        assert_eq!(result, Err(AuthError::InvalidToken));
    }
}
