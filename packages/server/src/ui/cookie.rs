//! Session cookie handling.
//!
//! The session token travels in an `HttpOnly` cookie named `jwt`.

use axum::http::{HeaderMap, header};

use crate::infrastructure::auth::TOKEN_TTL_SECS;

pub const SESSION_COOKIE: &str = "jwt";

/// Attributes applied to the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    /// `SameSite=None; Secure` when true (cross-site production frontend), `SameSite=Lax` otherwise.
    pub production: bool,
}

impl CookiePolicy {
    pub fn new(production: bool) -> Self {
        Self { production }
    }

    /// `Set-Cookie` value carrying `token` for the token lifetime.
    pub fn session(&self, token: &str) -> String {
        self.render(token, TOKEN_TTL_SECS)
    }

    /// `Set-Cookie` value that removes the session cookie.
    pub fn cleared(&self) -> String {
        self.render("", 0)
    }

    fn render(&self, value: &str, max_age: i64) -> String {
        let same_site = if self.production {
            "SameSite=None; Secure"
        } else {
            "SameSite=Lax"
        };
        format!(
            "{}={}; Path=/; Max-Age={}; HttpOnly; {}",
            SESSION_COOKIE, value, max_age, same_site
        )
    }
}

/// Session token from the request's `Cookie` headers, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
