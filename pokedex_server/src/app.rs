//! Router construction and shared request state.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use pokedex_lib::{Environment, ErrorNormalizer, PokedexClient, PokedexError};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::HttpError;
use crate::handlers;
use crate::settings::Settings;

/// How long browsers may cache a preflight answer.
const CORS_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Collaborators shared by all requests. Read-only after startup.
pub struct AppState {
    pub client: PokedexClient,
    pub errors: ErrorNormalizer,
}

impl AppState {
    pub fn new(client: PokedexClient, errors: ErrorNormalizer) -> Self {
        Self { client, errors }
    }

    /// Sends a failure through the normalizer.
    pub fn reject(&self, err: &PokedexError) -> HttpError {
        HttpError(self.errors.normalize(err))
    }
}

/// Builds the application router.
pub fn build_router(settings: &Settings, state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/items", get(handlers::list_items))
        .route("/items/:identifier", get(handlers::get_item))
        .route("/pokemon", get(handlers::list_items))
        .route("/pokemon/:identifier", get(handlers::get_item));

    if settings.environment == Environment::Test {
        router = router.route("/error", get(handlers::fail));
    }

    router
        .fallback(handlers::not_found)
        .layer(cors_layer(settings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET-only CORS. Any origin in development, the configured list elsewhere.
pub fn cors_layer(settings: &Settings) -> CorsLayer {
    let origins = if settings.environment.is_development() {
        AllowOrigin::any()
    } else {
        let allowed: Vec<HeaderValue> = settings
            .allowed_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                    None
                }
            })
            .collect();
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_credentials(false)
        .max_age(CORS_MAX_AGE)
}
