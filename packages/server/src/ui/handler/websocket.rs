//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::HeaderMap,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, UserId},
    infrastructure::dto::websocket::ClientEventDto,
    ui::{cookie::session_token, state::AppState},
    usecase::MessageRouter,
};

/// Query parameters for WebSocket connection
#[derive(Debug, Default, Deserialize)]
pub struct ConnectQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Upgrade to a WebSocket. Never rejects: a connection without a usable
/// identity is served as anonymous.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let identity = resolve_identity(&state, &headers, query.user_id.as_deref());
    ws.on_upgrade(move |socket| handle_socket(socket, state, identity))
}

/// A valid session cookie wins over the claimed `userId`.
fn resolve_identity(state: &AppState, headers: &HeaderMap, claimed: Option<&str>) -> Option<UserId> {
    session_token(headers)
        .and_then(|token| state.authenticate_usecase.identify(&token))
        .or_else(|| UserId::from_handshake(claimed))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// Everything addressed to this connection (presence updates, routed
/// messages) goes through the channel, so this task is the socket's only writer.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, identity: Option<UserId>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive events
    let (tx, rx) = mpsc::unbounded_channel();
    let session = state.connection_lifecycle.open(identity, tx).await;
    let connection_id = session.id();

    let router = state.message_router.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on {}: {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_client_event(&router, &connection_id, text.as_str()).await;
                }
                Message::Close(_) => {
                    tracing::info!("Connection {} requested close", connection_id);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // Spawn a task to push events to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.connection_lifecycle.close(&session).await;
}

async fn handle_client_event(router: &MessageRouter, connection_id: &ConnectionId, text: &str) {
    let event = match serde_json::from_str::<ClientEventDto>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Ignoring malformed event from {}: {}", connection_id, e);
            return;
        }
    };

    match event {
        ClientEventDto::RelayMessage {
            receiver_id,
            message,
        } => match UserId::new(receiver_id) {
            Ok(receiver_id) => {
                router.relay(&receiver_id, message).await;
            }
            Err(e) => tracing::warn!("Ignoring relay from {}: {}", connection_id, e),
        },
    }
}
