//! 接続ごとの状態機械
//!
//! ```text
//! Handshaking ──identified──▶ Registered ──closed──▶ Closed
//!      │                                               ▲
//!      └──────anonymous──────▶ Anonymous ──closed──────┘
//! ```
//!
//! 再接続状態は存在しません。切断された接続は完全に破棄され、クライアントが
//! 新しい接続を開いて再登録します。

use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use super::value_object::{ConnectionId, UserId};

/// Lifecycle state of one physical connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Handshaking,
    /// No identity: receives broadcasts, invisible to routing.
    Anonymous,
    Registered,
    Closed,
}

/// Rejected state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid connection transition from {from:?} to {to:?}")]
pub struct ConnectionStateError {
    pub from: ConnectionState,
    pub to: ConnectionState,
}

impl ConnectionState {
    /// Handshake finished with a usable identity.
    pub fn identified(self) -> Result<Self, ConnectionStateError> {
        self.transition(Self::Registered, matches!(self, Self::Handshaking))
    }

    /// Handshake finished without identity.
    pub fn anonymous(self) -> Result<Self, ConnectionStateError> {
        self.transition(Self::Anonymous, matches!(self, Self::Handshaking))
    }

    /// Transport closed. Valid from every state except `Closed`.
    pub fn closed(self) -> Result<Self, ConnectionStateError> {
        self.transition(Self::Closed, !matches!(self, Self::Closed))
    }

    fn transition(self, to: Self, allowed: bool) -> Result<Self, ConnectionStateError> {
        if allowed {
            Ok(to)
        } else {
            Err(ConnectionStateError { from: self, to })
        }
    }
}

/// One physical connection as seen by the lifecycle use case.
#[derive(Debug)]
pub struct ConnectionSession {
    id: ConnectionId,
    user_id: Option<UserId>,
    state: Mutex<ConnectionState>,
}

impl ConnectionSession {
    pub fn new(user_id: Option<UserId>) -> Self {
        Self {
            id: ConnectionId::generate(),
            user_id,
            state: Mutex::new(ConnectionState::Handshaking),
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn state(&self) -> ConnectionState {
        *self.lock_state()
    }

    /// Finish the handshake. Returns the state entered.
    pub fn complete_handshake(&self) -> Result<ConnectionState, ConnectionStateError> {
        let mut state = self.lock_state();
        let next = if self.user_id.is_some() {
            state.identified()?
        } else {
            state.anonymous()?
        };
        *state = next;
        Ok(next)
    }

    /// Enter `Closed`. Returns the state that was left; only the first caller
    /// gets `Ok`, so teardown runs once however many close signals race.
    pub fn close(&self) -> Result<ConnectionState, ConnectionStateError> {
        let mut state = self.lock_state();
        let previous = *state;
        *state = previous.closed()?;
        Ok(previous)
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ConnectionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
