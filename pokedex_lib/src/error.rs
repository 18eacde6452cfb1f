//! Error types for the library layer.

use std::fmt;

/// Every failure a request can end in. Each variant is tagged where the failure
/// happens, so the normalizer matches on the kind instead of probing fields.
#[derive(Debug)]
pub enum PokedexError {
    /// A call to the upstream API failed. Carries the upstream status and body
    /// when a response was received.
    Upstream(pokeapi::Error),
    /// Client input rejected before any upstream call.
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },
    /// Raised on purpose by handler logic with an intended status and name.
    Application(ApplicationError),
    /// Anything else, e.g. an upstream record that does not have the expected shape.
    Unexpected(String),
}

/// An error raised deliberately by request handling, e.g. a blank identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationError {
    /// Intended HTTP status. `None` is passed through untouched.
    pub status: Option<u16>,
    /// Short error name reported as the `error` field, e.g. `BadRequestError`.
    pub name: String,
    pub message: String,
}

impl ApplicationError {
    pub fn new(status: Option<u16>, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(Some(400), "BadRequestError", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Some(404), "NotFoundError", message)
    }
}

impl PokedexError {
    pub fn validation(message: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// The bare error message, without the category prefix `Display` adds.
    pub fn message(&self) -> String {
        match self {
            Self::Upstream(e) => e.to_string(),
            Self::Validation { message, .. } => message.clone(),
            Self::Application(e) => e.message.clone(),
            Self::Unexpected(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream(_) => write!(f, "Upstream API error"),
            Self::Validation { message, .. } => write!(f, "Validation error: {}", message),
            Self::Application(e) => write!(f, "{}: {}", e.name, e.message),
            Self::Unexpected(msg) => write!(f, "Unexpected error: {}", msg),
        }
    }
}

impl std::error::Error for PokedexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Upstream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<pokeapi::Error> for PokedexError {
    fn from(e: pokeapi::Error) -> Self {
        Self::Upstream(e)
    }
}

impl From<ApplicationError> for PokedexError {
    fn from(e: ApplicationError) -> Self {
        Self::Application(e)
    }
}

/// Decoding an upstream record into its typed shape failed.
impl From<serde_json::Error> for PokedexError {
    fn from(e: serde_json::Error) -> Self {
        Self::Unexpected(format!("Malformed upstream record: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn upstream_message_is_the_upstream_text() {
        let err = PokedexError::from(pokeapi::Error::HttpStatus {
            status: 404,
            body: String::new(),
        });
        assert_eq!(err.message(), "Request failed with status code 404");
        assert_eq!(err.to_string(), "Upstream API error");
        assert!(err.source().is_some());
    }

    #[test]
    fn application_display_uses_name() {
        let err = PokedexError::from(ApplicationError::bad_request("identifier is blank"));
        assert_eq!(err.to_string(), "BadRequestError: identifier is blank");
        assert_eq!(err.message(), "identifier is blank");
    }

    #[test]
    fn json_errors_become_unexpected() {
        let json_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = PokedexError::from(json_err);
        assert!(matches!(err, PokedexError::Unexpected(ref m) if m.starts_with("Malformed upstream record")));
    }
}
