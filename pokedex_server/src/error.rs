//! Rendering of normalized errors as HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pokedex_lib::NormalizedError;

/// A normalized error on its way out as a JSON response.
#[derive(Debug)]
pub struct HttpError(pub NormalizedError);

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.wire_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.body)).into_response()
    }
}
