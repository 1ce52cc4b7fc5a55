//! Messaging endpoints (`/api/message/*`).

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::UserId,
    infrastructure::dto::{
        http::{SendMessageRequest, SidebarUserDto},
        websocket::MessageDto,
    },
    ui::{error::ApiError, extractor::AuthUser, state::AppState},
    usecase::SendMessageInput,
};

/// Every other user, flagged with live presence.
pub async fn get_users_for_sidebar(
    State(state): State<Arc<AppState>>,
    AuthUser(me): AuthUser,
) -> Result<Json<Vec<SidebarUserDto>>, ApiError> {
    let users = state.list_sidebar_users_usecase.execute(&me.id).await?;

    // Domain Model から DTO への変換
    Ok(Json(
        users
            .iter()
            .map(|u| SidebarUserDto::new(&u.user, u.is_online))
            .collect(),
    ))
}

/// Conversation history between the caller and `{id}`.
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    AuthUser(me): AuthUser,
    Path(other_id): Path<String>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let other = UserId::try_from(other_id).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let messages = state.get_conversation_usecase.execute(&me.id, &other).await?;
    Ok(Json(messages.iter().map(MessageDto::from).collect()))
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    AuthUser(me): AuthUser,
    Path(receiver_id): Path<String>,
    Json(body): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let message = state
        .send_message_usecase
        .execute(
            me.id,
            receiver_id,
            SendMessageInput {
                text: body.text,
                image: body.image,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(MessageDto::from(&message))))
}
