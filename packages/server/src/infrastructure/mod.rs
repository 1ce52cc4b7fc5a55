//! Infrastructure layer
//!
//! ドメイン層が定義する trait の具体的な実装と、通信用の DTO を提供します。

pub mod auth;
pub mod dto;
pub mod media;
pub mod message_pusher;
pub mod registry;
pub mod repository;
