use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upload size cap in bytes. `None` leaves the request body uncapped,
    /// which is the historical contract of this endpoint.
    pub max_upload_bytes: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => Some(
                    v.parse::<usize>()
                        .context("MAX_UPLOAD_BYTES must be a byte count")?,
                ),
                Err(_) => None,
            },
        })
    }
}
