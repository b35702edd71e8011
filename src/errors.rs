//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid payload: {0}")]
    Payload(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    /// Step 1 of the provisioning flow failed; carries the raw response body.
    #[error("Failed to create guild: {0}")]
    GuildCreation(String),

    /// Step 2 of the provisioning flow failed; carries the raw response body.
    #[error("Failed to create form: {0}")]
    FormCreation(String),

    /// Step 3 of the provisioning flow failed; carries the raw response body.
    #[error("Failed to create role platform: {0}")]
    RolePlatformCreation(String),

    #[error("Failed to submit form: {0}")]
    Submission(String),

    #[error("Failed to load guild data: {0}")]
    Read(String),

    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
