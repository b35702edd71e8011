//! Client configuration loaded from environment variables.

use std::time::Duration;

use reqwest::Client;

use crate::errors::{ClientError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the guild.xyz v2 API (e.g. https://api.guild.xyz/v2)
    pub guild_api_url: String,
    /// Base URL of the local guild directory service
    pub directory_url: String,
    /// Timeout applied to every outbound HTTP request
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load an optional `.env` file, then read the configuration from the
    /// environment.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        Ok(Config {
            guild_api_url: env_var("GUILD_API_URL")
                .unwrap_or_else(|_| "https://api.guild.xyz/v2".to_string()),
            directory_url: env_var("DIRECTORY_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            http_timeout_secs: env_var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| ClientError::Config("Invalid HTTP_TIMEOUT_SECS".to_string()))?,
        })
    }

    /// Build the HTTP client shared by all API calls.
    pub fn http_client(&self) -> Result<Client> {
        Ok(Client::builder()
            .timeout(Duration::from_secs(self.http_timeout_secs))
            .build()?)
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| ClientError::Config(format!("Missing env var: {key}")))
}
