//! Maps a [`PokedexError`] to an HTTP status and JSON error body.

use std::error::Error as _;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::environment::Environment;
use crate::error::PokedexError;

const INTERNAL_SERVER_ERROR: u16 = 500;
const BAD_REQUEST: u16 = 400;
const UNPROCESSABLE_ENTITY: u16 = 422;

/// Message shown instead of internal failure text in production.
pub const REDACTED_MESSAGE: &str = "Something went wrong";

/// JSON error body. `message` and `details` are left out when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Result of normalizing an error.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedError {
    /// `None` only for application errors raised without a status.
    pub status: Option<u16>,
    pub body: ErrorBody,
}

impl NormalizedError {
    /// Status to put on the wire. A response always needs one, so a missing
    /// status is sent as 500.
    pub fn wire_status(&self) -> u16 {
        self.status.unwrap_or(INTERNAL_SERVER_ERROR)
    }
}

/// Turns failures into client-facing responses.
///
/// Holds the environment explicitly: in production, messages of unexpected
/// failures are replaced with [`REDACTED_MESSAGE`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ErrorNormalizer {
    environment: Environment,
}

impl ErrorNormalizer {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Logs `err` and maps it to a status and body. First match wins:
    /// upstream response, validation, application, then the 500 fallback.
    pub fn normalize(&self, err: &PokedexError) -> NormalizedError {
        tracing::error!("{}", error_report(err));

        match err {
            PokedexError::Upstream(upstream) => match upstream.status() {
                Some(status) => upstream_response(upstream, status),
                None => self.fallback(err),
            },
            PokedexError::Validation { details, .. } => NormalizedError {
                status: Some(BAD_REQUEST),
                body: ErrorBody {
                    error: "Validation Error".to_string(),
                    message: None,
                    details: details.clone(),
                },
            },
            PokedexError::Application(app) => NormalizedError {
                status: app.status,
                body: ErrorBody {
                    error: app.name.clone(),
                    message: Some(app.message.clone()),
                    details: None,
                },
            },
            PokedexError::Unexpected(_) => self.fallback(err),
        }
    }

    fn fallback(&self, err: &PokedexError) -> NormalizedError {
        let message = if self.environment.is_production() {
            REDACTED_MESSAGE.to_string()
        } else {
            err.message()
        };
        NormalizedError {
            status: Some(INTERNAL_SERVER_ERROR),
            body: ErrorBody {
                error: "Internal Server Error".to_string(),
                message: Some(message),
                details: None,
            },
        }
    }
}

fn upstream_response(upstream: &pokeapi::Error, status: u16) -> NormalizedError {
    let details = if status == UNPROCESSABLE_ENTITY {
        upstream
            .body_json()
            .and_then(|body| body.get("errors").cloned())
    } else {
        None
    };
    NormalizedError {
        status: Some(status),
        body: ErrorBody {
            error: status_text(status).to_string(),
            message: Some(upstream.to_string()),
            details,
        },
    }
}

/// Canonical reason phrase for a status code.
pub fn status_text(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status")
}

/// The error and its chain of causes on one line.
fn error_report(err: &PokedexError) -> String {
    let mut report = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        report.push_str(": ");
        report.push_str(&cause.to_string());
        source = cause.source();
    }
    report
}
