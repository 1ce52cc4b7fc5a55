//! Authenticated-user extractor for protected routes.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::domain::User;

use super::{cookie::session_token, error::ApiError, state::AppState};

/// The user owning the request's session cookie.
///
/// Rejects with 401 when the cookie is missing or the token is invalid or
/// expired, and with 404 when the token's user no longer exists.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized("Unauthorized - No Token Provided"))?;

        let user = state.authenticate_usecase.execute(&token).await?;
        Ok(AuthUser(user))
    }
}
