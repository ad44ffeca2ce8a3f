//! Server configuration, read once from the environment at startup.

use anyhow::Context;

pub struct ServerConfig {
    /// Provider credential. Required; its absence aborts startup rather than
    /// failing individual requests.
    pub civic_api_key: String,

    pub host: String,

    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let civic_api_key = std::env::var("GOOGLE_CIVIC_API_KEY")
            .context("GOOGLE_CIVIC_API_KEY environment variable is not set")?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => 3001,
        };

        Ok(Self {
            civic_api_key,
            host,
            port,
        })
    }
}
