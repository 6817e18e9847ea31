/// Error types shared by the catalog loader and the thumbnail fetcher

use thiserror::Error;

/// Everything that can go wrong while talking to the catalog endpoint.
///
/// Variants carry plain strings instead of the underlying `reqwest` /
/// `serde_json` errors so the value can be cloned into iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("Network Error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// The body could not be decoded (bad JSON, missing field, broken image)
    #[error("Could not decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None if err.is_decode() => FetchError::Decode(err.to_string()),
            None => FetchError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
