//! Error taxonomy for backend requests.
//!
//! A rejected PIN is not an error (see [`crate::auth::AuthOutcome`]);
//! everything that goes wrong while talking to the backend is an `ApiError`.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response. `message` carries the server-supplied message when
    /// the error body had one, otherwise `HTTP <status>`.
    #[error("{message}")]
    Http { status: StatusCode, message: String },

    /// The request never completed: connection, TLS, or protocol failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response whose body was not the JSON the endpoint promises.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error bodies optionally carry a human-readable `message` field.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body.
    ///
    /// The body is probed for a JSON `message` field; an unparsable body
    /// falls back to the bare status code.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        ApiError::Http { status, message }
    }

    /// Status code for HTTP failures, `None` for transport and decode
    /// failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
