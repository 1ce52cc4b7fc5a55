//! HTTP / WebSocket handlers.

mod auth;
mod health;
mod message;
mod websocket;

pub use auth::{check_auth, login, logout, signup, update_profile};
pub use health::health_check;
pub use message::{get_messages, get_users_for_sidebar, send_message};
pub use websocket::websocket_handler;
