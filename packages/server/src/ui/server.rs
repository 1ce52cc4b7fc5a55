//! Server execution logic.

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::infrastructure::media::local::MEDIA_ROUTE;

use super::{
    handler::{
        check_auth, get_messages, get_users_for_sidebar, health_check, login, logout,
        send_message, signup, update_profile, websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// HTTP-level settings that are not part of the application state.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Origins allowed to make credentialed cross-origin requests.
    pub cors_origins: Vec<String>,
    /// Maximum request body size in bytes (images arrive inline as base64).
    pub body_limit: usize,
    /// Directory served under `/media`.
    pub media_dir: PathBuf,
}

/// Chat server: REST API, WebSocket endpoint and media files.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app_state, settings);
/// server.run("127.0.0.1".to_string(), 4000).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
    settings: ServerSettings,
}

impl Server {
    pub fn new(state: AppState, settings: ServerSettings) -> Self {
        Self {
            state: Arc::new(state),
            settings,
        }
    }

    /// Build the axum router with every route and middleware.
    pub fn router(&self) -> Router {
        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/health", get(health_check))
            .route("/api/health", get(health_check))
            .route("/api/auth/signup", post(signup))
            .route("/api/auth/login", post(login))
            .route("/api/auth/logout", post(logout))
            .route("/api/auth/update-profile", put(update_profile))
            .route("/api/auth/check", get(check_auth))
            .route("/api/message/users", get(get_users_for_sidebar))
            .route("/api/message/{id}", get(get_messages))
            .route("/api/message/send/{id}", post(send_message))
            // アップロード済みの画像
            .nest_service(MEDIA_ROUTE, ServeDir::new(&self.settings.media_dir))
            .layer(DefaultBodyLimit::max(self.settings.body_limit))
            .layer(cors_layer(&self.settings.cors_origins))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the chat server
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener).await?;
        Ok(())
    }

    /// Serve on an already bound listener until a shutdown signal arrives.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        let app = self.router();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::COOKIE])
}
