//! Command-line / environment configuration.

use std::path::PathBuf;

use clap::Parser;

/// Frontend dev-server origins allowed outside production.
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:5173",
    "http://localhost:5174",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:5174",
];

#[derive(Parser, Debug, Clone)]
#[command(name = "tayori-server")]
#[command(about = "Real-time chat backend with presence and direct messages", long_about = None)]
pub struct ServerConfig {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// Secret used to sign session tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Allowed CORS origins (comma separated)
    #[arg(
        long,
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub cors_origins: Vec<String>,

    /// Production mode: cross-site secure cookies, no dev origins
    #[arg(long, env = "PRODUCTION")]
    pub production: bool,

    /// Directory uploaded images are written to
    #[arg(long, env = "MEDIA_DIR", default_value = "media")]
    pub media_dir: PathBuf,

    /// Public base URL used in stored media URLs (defaults to http://{host}:{port})
    #[arg(long, env = "PUBLIC_URL")]
    pub public_url: Option<String>,

    /// Maximum request body size in bytes
    #[arg(long, env = "BODY_LIMIT", default_value_t = 10 * 1024 * 1024)]
    pub body_limit: usize,
}

impl ServerConfig {
    /// Configured origins, plus the local dev-server origins outside production.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = self
            .cors_origins
            .iter()
            .map(|o| o.trim().trim_end_matches('/').to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if !self.production {
            for dev in DEV_ORIGINS {
                if !origins.iter().any(|o| o == dev) {
                    origins.push(dev.to_string());
                }
            }
        }
        origins
    }

    pub fn public_url(&self) -> String {
        match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}:{}", self.host, self.port),
        }
    }
}
