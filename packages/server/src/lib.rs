//! Real-time chat backend: presence and direct-message delivery.
//!
//! Users hold a WebSocket connection while online. The server tracks who is
//! online, broadcasts the online set whenever it changes, and routes each
//! persisted direct message to its receiver's live connection.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod app;
pub mod config;
