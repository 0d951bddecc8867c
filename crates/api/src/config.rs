use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except `JWT_SECRET` have sensible defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Media upload storage settings.
    pub media: MediaConfig,
}

/// Where uploaded media lives and how it is addressed publicly.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory uploaded files are written to (default: `uploads`).
    pub root: PathBuf,
    /// Base URL prefixed onto stored filenames in responses
    /// (default: `http://localhost:3000`).
    pub public_base_url: String,
    /// Maximum accepted multipart body size in bytes (default: 50 MiB).
    pub max_upload_bytes: usize,
}

/// Default multipart body cap: 50 MiB, enough for a two-minute phone video.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MEDIA_ROOT`           | `uploads`                  |
    /// | `APP_URL`              | `http://localhost:3000`    |
    /// | `MAX_UPLOAD_BYTES`     | `52428800`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let media = MediaConfig {
            root: std::env::var("MEDIA_ROOT")
                .unwrap_or_else(|_| "uploads".into())
                .into(),
            public_base_url: std::env::var("APP_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into())
                .trim_end_matches('/')
                .to_string(),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse()
                .expect("MAX_UPLOAD_BYTES must be a valid usize"),
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            media,
        }
    }
}

impl MediaConfig {
    /// Public URL for a stored filename, e.g. `{base}/uploads/{name}`.
    pub fn public_url(&self, stored_name: &str) -> String {
        format!("{}/uploads/{stored_name}", self.public_base_url)
    }
}
