//! HTTP / WebSocket server (axum).

mod cookie;
mod error;
mod extractor;
mod handler;
mod server;
mod signal;
pub mod state;

pub use cookie::{CookiePolicy, SESSION_COOKIE};
pub use error::ApiError;
pub use server::{Server, ServerSettings};
pub use state::AppState;
