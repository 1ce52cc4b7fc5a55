//! Chat server with presence tracking and direct-message delivery.
//!
//! Run with:
//! ```not_rust
//! JWT_SECRET=change-me cargo run --bin tayori-server
//! cargo run --bin tayori-server -- --host 0.0.0.0 --port 4000 --jwt-secret change-me
//! ```

use std::sync::Arc;

use clap::Parser;
use tayori_server::{
    app::build_server, config::ServerConfig, infrastructure::auth::bcrypt::DEFAULT_COST,
};
use tayori_shared::{logger::setup_logger, time::SystemClock};

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let config = ServerConfig::parse();
    tracing::info!(
        "Starting ({} mode), media dir: {}",
        if config.production { "production" } else { "development" },
        config.media_dir.display()
    );

    let server = build_server(&config, Arc::new(SystemClock), DEFAULT_COST);
    if let Err(e) = server.run(config.host.clone(), config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
