//! Conversion logic between DTOs and domain entities.

use tayori_shared::time::timestamp_to_rfc3339;

use crate::domain::{Message, ServerEvent, User};

use super::{
    http::{SidebarUserDto, UserDto},
    websocket::{MessageDto, NewMessagePayload, ServerEventDto},
};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&Message> for MessageDto {
    fn from(model: &Message) -> Self {
        Self {
            id: model.id.to_string(),
            sender_id: model.sender_id.as_str().to_string(),
            receiver_id: model.receiver_id.as_str().to_string(),
            text: model.text.as_ref().map(|t| t.as_str().to_string()),
            image: model.image_url.as_ref().map(|u| u.as_str().to_string()),
            created_at: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}

impl From<&User> for UserDto {
    fn from(model: &User) -> Self {
        Self {
            id: model.id.as_str().to_string(),
            full_name: model.full_name.as_str().to_string(),
            email: model.email.as_str().to_string(),
            profile_pic: model.profile_pic.clone(),
            created_at: timestamp_to_rfc3339(model.created_at.value()),
            updated_at: timestamp_to_rfc3339(model.updated_at.value()),
        }
    }
}

impl SidebarUserDto {
    pub fn new(user: &User, is_online: bool) -> Self {
        Self {
            user: user.into(),
            is_online,
        }
    }
}

impl From<&ServerEvent> for ServerEventDto {
    fn from(event: &ServerEvent) -> Self {
        match event {
            ServerEvent::OnlineUsers(users) => Self::GetOnlineUsers(
                users.iter().map(|id| id.as_str().to_string()).collect(),
            ),
            ServerEvent::NewMessage(message) => {
                Self::NewMessage(NewMessagePayload::Stored(message.into()))
            }
            ServerEvent::Relayed(payload) => {
                Self::NewMessage(NewMessagePayload::Relayed(payload.clone()))
            }
        }
    }
}

/// Encode a domain event into the JSON text sent over the socket.
pub fn encode_server_event(event: &ServerEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ServerEventDto::from(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Email, FullName, ImageUrl, MessageText, NewMessage, NewUser, Timestamp, UserId,
    };
    use serde_json::json;

    fn user_id(value: &str) -> UserId {
        UserId::new(value.to_string()).unwrap()
    }

    #[test]
    fn test_message_to_dto() {
        // テスト項目: Message が camelCase の DTO に変換される
        // given (前提条件):
        let message = Message::persist(
            NewMessage {
                sender_id: user_id("alice"),
                receiver_id: user_id("bob"),
                text: Some(MessageText::new("hello".to_string()).unwrap()),
                image_url: Some(ImageUrl::new("http://cdn/img.png".to_string()).unwrap()),
            },
            Timestamp::new(1_672_531_200_000),
        );

        // when (操作):
        let dto = MessageDto::from(&message);

        // then (期待する結果):
        assert_eq!(dto.id, message.id.to_string());
        assert_eq!(dto.sender_id, "alice");
        assert_eq!(dto.receiver_id, "bob");
        assert_eq!(dto.text.as_deref(), Some("hello"));
        assert_eq!(dto.image.as_deref(), Some("http://cdn/img.png"));
        assert_eq!(dto.created_at, "2023-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_user_to_dto_hides_password_hash() {
        // テスト項目: UserDto にパスワードハッシュが含まれない
        // given (前提条件):
        let user = User::create(
            NewUser {
                full_name: FullName::new("Alice".to_string()).unwrap(),
                email: Email::new("alice@example.com".to_string()).unwrap(),
                password_hash: "$2b$secret-hash".to_string(),
            },
            Timestamp::new(0),
        );

        // when (操作):
        let value = serde_json::to_value(SidebarUserDto::new(&user, true)).unwrap();

        // then (期待する結果):
        assert!(!value.to_string().contains("secret-hash"));
        assert_eq!(value["fullName"], "Alice");
        assert_eq!(value["isOnline"], true);
    }

    #[test]
    fn test_encode_relayed_event_as_new_message() {
        // テスト項目: 中継イベントは newMessage として生の payload のまま送られる
        // given (前提条件):
        let event = ServerEvent::Relayed(json!({"text": "yo"}));

        // when (操作):
        let encoded = encode_server_event(&event).unwrap();

        // then (期待する結果):
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value, json!({"type": "newMessage", "payload": {"text": "yo"}}));
    }
}
