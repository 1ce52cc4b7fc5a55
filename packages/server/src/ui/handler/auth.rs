//! Account and session endpoints (`/api/auth/*`).

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    infrastructure::dto::http::{
        LoginRequest, MessageResponse, SignupRequest, UpdateProfileRequest, UserDto,
    },
    ui::{error::ApiError, extractor::AuthUser, state::AppState},
    usecase::{LoginInput, SignupInput},
};

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = SignupInput {
        full_name: body.full_name.unwrap_or_default(),
        email: body.email.unwrap_or_default(),
        password: body.password.unwrap_or_default(),
    };
    let (user, token) = state.signup_usecase.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, state.cookie_policy.session(&token))],
        Json(UserDto::from(&user)),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = LoginInput {
        email: body.email.unwrap_or_default(),
        password: body.password.unwrap_or_default(),
    };
    let (user, token) = state.login_usecase.execute(input).await?;

    Ok((
        [(header::SET_COOKIE, state.cookie_policy.session(&token))],
        Json(UserDto::from(&user)),
    ))
}

pub async fn logout(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::SET_COOKIE, state.cookie_policy.cleared())],
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let updated = state
        .update_profile_usecase
        .execute(&user.id, body.profile_pic)
        .await?;
    Ok(Json(UserDto::from(&updated)))
}

pub async fn check_auth(AuthUser(user): AuthUser) -> Json<UserDto> {
    Json(UserDto::from(&user))
}
