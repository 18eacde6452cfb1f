//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a usable response (network error, timeout,
    /// or a body that could not be decoded).
    #[error("Request failed: {reason}")]
    RequestFailed { reason: String },
    /// The API returned a non-success status. The full body is kept so callers
    /// can inspect upstream error payloads.
    #[error("Request failed with status code {status}")]
    HttpStatus { status: u16, body: String },
}

impl Error {
    pub(crate) fn request_failed(reason: impl std::fmt::Display) -> Self {
        Self::RequestFailed {
            reason: reason.to_string(),
        }
    }

    /// HTTP status of the upstream response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::RequestFailed { .. } => None,
        }
    }

    /// The upstream response body decoded as JSON, when there is a body and it is JSON.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::HttpStatus { body, .. } => serde_json::from_str(body).ok(),
            Self::RequestFailed { .. } => None,
        }
    }
}
