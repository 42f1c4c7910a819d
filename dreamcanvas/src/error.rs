//! Error definitions for the studio core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Empty response: {message}")]
    EmptyResponse { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The human-readable text shown inline near the prompt input. Provider
    /// and configuration messages pass through verbatim; transport-level
    /// failures fall back to a generic line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ApiError { message, .. }
            | Self::InvalidConfig { message }
            | Self::EmptyResponse { message }
            | Self::Storage { message } => message.clone(),
            Self::HttpClient { .. } | Self::Serialization { .. } | Self::Io { .. } => {
                "Failed to generate your image.".to_string()
            }
        }
    }
}
