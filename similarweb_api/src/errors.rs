//! Error types for the API client.

use serde_json::Value;

/// Errors that can occur when building or running an endpoint query.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No public suffix could be determined for a domain-shaped input.
    #[error("Invalid URL: no registrable domain found in {input:?}")]
    InvalidUrl { input: String },
    /// An endpoint name outside the client's allowed set was supplied.
    #[error("Invalid endpoint {endpoint:?}, must be one of: {allowed}")]
    InvalidEndpoint { endpoint: String, allowed: String },
    /// The decoded response lacks the endpoint's presence key.
    #[error("Invalid response: missing {key:?} key")]
    InvalidResponse { key: &'static str, payload: Value },
    /// The API key was empty.
    #[error("API key must not be empty")]
    EmptyApiKey,
    /// A parameter the endpoint requires was not supplied.
    #[error("Missing required parameter {0:?}")]
    MissingParameter(&'static str),
    /// The HTTP request failed (DNS, connection, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// The upstream `Error` message carried by an [`Error::InvalidResponse`] payload, if any.
    ///
    /// The upstream API has no fixed schema for this field, so only string
    /// messages are surfaced.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            Error::InvalidResponse { payload, .. } => payload.get("Error").and_then(Value::as_str),
            _ => None,
        }
    }
}
