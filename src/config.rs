use anyhow::{Context, Result};

use crate::store::DEFAULT_CAPACITY;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind the HTTP server to, e.g. "0.0.0.0"
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Public base URL used when generating short links, e.g. "https://go.example.com"
    /// Must NOT have a trailing slash.
    pub base_url: String,

    /// Number of entries at which the store is wiped before the next insert.
    pub store_capacity: usize,
}

impl AppConfig {
    /// Load configuration from environment variables (populated by dotenvy before this is called).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8000".into())
            .parse::<u16>()
            .context("PORT must be a valid port number (1–65535)")?;

        let base_url = lookup("BASE_URL")
            .unwrap_or_else(|| "https://shortenit.up.railway.app".into())
            .trim_end_matches('/')
            .to_owned();

        if base_url.is_empty() {
            anyhow::bail!("BASE_URL must not be empty");
        }

        let store_capacity = match lookup("STORE_CAPACITY") {
            Some(raw) => raw
                .parse::<usize>()
                .context("STORE_CAPACITY must be a positive integer")?,
            None => DEFAULT_CAPACITY,
        };

        if store_capacity == 0 {
            anyhow::bail!("STORE_CAPACITY must be greater than zero");
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            base_url,
            store_capacity,
        })
    }

    /// Full public link for a short key.
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }
}
