//! Configuration loading from environment.

use std::env;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Unset selects the in-memory registry.
    pub database_url: Option<String>,
    /// OTLP collector endpoint; traces are only exported when set.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT {:?}: {}", port, e))?,
            None => 8000,
        };

        Ok(Self {
            host,
            port,
            database_url: var("DATABASE_URL"),
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
