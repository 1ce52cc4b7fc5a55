//! UseCase: メッセージ送信処理
//!
//! 1. 入力検証（本文か画像のどちらかが必要）
//! 2. 画像があればメディアストアにアップロード
//! 3. HistoryStore に保存（保存に失敗したら配送しない）
//! 4. MessageRouter で受信者のライブ接続へ配送
//!
//! 送信の成否は保存の成否だけで決まり、受信者がオンラインかどうかには依存しません。

use std::sync::Arc;

use crate::domain::{
    MediaStore, Message, MessageRepository, MessageText, NewMessage, UserId,
};

use super::{error::SendMessageError, route_message::MessageRouter};

/// Raw request content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendMessageInput {
    pub text: Option<String>,
    /// Base64 data URL, uploaded before persisting.
    pub image: Option<String>,
}

pub struct SendMessageUseCase {
    message_repository: Arc<dyn MessageRepository>,
    media_store: Arc<dyn MediaStore>,
    router: Arc<MessageRouter>,
}

impl SendMessageUseCase {
    pub fn new(
        message_repository: Arc<dyn MessageRepository>,
        media_store: Arc<dyn MediaStore>,
        router: Arc<MessageRouter>,
    ) -> Self {
        Self {
            message_repository,
            media_store,
            router,
        }
    }

    /// Persist a message from `sender_id` to `receiver_id`, then route it.
    pub async fn execute(
        &self,
        sender_id: UserId,
        receiver_id: String,
        input: SendMessageInput,
    ) -> Result<Message, SendMessageError> {
        let receiver_id =
            UserId::new(receiver_id).map_err(|_| SendMessageError::InvalidReceiver)?;
        let text = input.text.and_then(|t| MessageText::new(t).ok());
        let image = input.image.filter(|i| !i.trim().is_empty());
        if text.is_none() && image.is_none() {
            return Err(SendMessageError::EmptyMessage);
        }

        let image_url = match image {
            Some(payload) => Some(self.media_store.upload(&payload).await.map_err(|e| {
                tracing::warn!("Image upload failed for '{}': {}", sender_id, e);
                SendMessageError::UploadFailed(e.to_string())
            })?),
            None => None,
        };

        let message = self
            .message_repository
            .save(NewMessage {
                sender_id,
                receiver_id,
                text,
                image_url,
            })
            .await
            .inspect_err(|e| tracing::error!("Failed to persist message: {}", e))?;
        tracing::info!(
            "Message {} saved ('{}' -> '{}')",
            message.id,
            message.sender_id,
            message.receiver_id
        );

        self.router.route(&message).await;
        Ok(message)
    }
}
