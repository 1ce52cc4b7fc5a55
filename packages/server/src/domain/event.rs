//! Events pushed from the server to connected clients.

use super::{entity::Message, value_object::UserId};

/// Server → client event. Encoding to the wire is an infrastructure concern.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Current presence snapshot, sent to every connection.
    OnlineUsers(Vec<UserId>),
    /// A persisted message, sent to its receiver.
    NewMessage(Message),
    /// Unpersisted payload relayed from one client to another.
    Relayed(serde_json::Value),
}

impl ServerEvent {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OnlineUsers(_) => "getOnlineUsers",
            Self::NewMessage(_) | Self::Relayed(_) => "newMessage",
        }
    }
}
