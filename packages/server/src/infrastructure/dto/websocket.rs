//! WebSocket event DTOs.
//!
//! すべてのイベントは `{"type": <event>, "payload": <value>}` の JSON 形式です。

use serde::{Deserialize, Serialize};

/// Wire form of a persisted message (also returned by the HTTP API).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "senderId")]
    pub sender_id: String,
    #[serde(rename = "receiverId")]
    pub receiver_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// RFC 3339
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Payload of a `newMessage` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NewMessagePayload {
    Stored(MessageDto),
    Relayed(serde_json::Value),
}

/// Server → client events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ServerEventDto {
    /// Every user currently online.
    GetOnlineUsers(Vec<String>),
    NewMessage(NewMessagePayload),
}

/// Client → server events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ClientEventDto {
    /// Lightweight relay to one receiver, bypassing persistence.
    RelayMessage {
        #[serde(rename = "receiverId")]
        receiver_id: String,
        message: serde_json::Value,
    },
}
