use aqua_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors from the CLI HTTP client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failure (connection refused, timeout, ...)
    #[error("HTTP error: {message} at {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with its error envelope
    #[error("API error ({code}): {message} at {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    /// Response body was not the JSON we expected
    #[error("JSON error: {message} at {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    #[track_caller]
    pub fn from_reqwest(source: reqwest::Error) -> Self {
        Self::Http {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn from_json(source: serde_json::Error) -> Self {
        Self::Json {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn api_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::from_reqwest(source)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::from_json(source)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
