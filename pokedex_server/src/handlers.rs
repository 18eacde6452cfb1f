//! Route handlers. Each one runs the pipeline and hands any failure to the
//! shared [`ErrorNormalizer`](pokedex_lib::ErrorNormalizer).

use std::sync::Arc;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use pokedex_lib::validation::parse_page_param;
use pokedex_lib::{ApplicationError, ItemDetail, PaginatedResult, PokedexError};
use serde_json::json;

use crate::app::AppState;
use crate::error::HttpError;

/// Query string of the list endpoint, kept as raw pairs so a repeated key is
/// not a deserialization failure.
pub type ListParams = Vec<(String, String)>;

/// GET /items - one page of the name-sorted list
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<PaginatedResult>, HttpError> {
    paginated_items(&state, query)
        .await
        .map(Json)
        .map_err(|err| state.reject(&err))
}

/// GET /items/:identifier - one item by name or id
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    identifier: Result<Path<String>, PathRejection>,
) -> Result<Json<ItemDetail>, HttpError> {
    item_details(&state, identifier)
        .await
        .map(Json)
        .map_err(|err| state.reject(&err))
}

async fn paginated_items(
    state: &AppState,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<PaginatedResult, PokedexError> {
    let Query(params) =
        query.map_err(|rejection| validation_error(rejection.body_text(), "query"))?;
    let page = first_page(&params).and_then(parse_page_param);
    state.client.get_paginated_items(page).await
}

async fn item_details(
    state: &AppState,
    identifier: Result<Path<String>, PathRejection>,
) -> Result<ItemDetail, PokedexError> {
    let Path(identifier) = identifier
        .map_err(|rejection| validation_error(rejection.body_text(), "identifier"))?;
    if identifier.trim().is_empty() {
        return Err(ApplicationError::bad_request("Identifier must not be blank").into());
    }
    state.client.get_item_details(identifier.as_str()).await
}

/// Fallback for unknown routes.
pub async fn not_found(State(state): State<Arc<AppState>>) -> HttpError {
    state.reject(&ApplicationError::not_found("Route not found").into())
}

/// GET /error - always fails; mounted in the test environment only.
pub async fn fail(State(state): State<Arc<AppState>>) -> HttpError {
    state.reject(&PokedexError::Unexpected("fail".to_string()))
}

/// First `page` value; later repeats are ignored. Unusable values mean page 1.
fn first_page(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str())
}

fn validation_error(text: String, location: &str) -> PokedexError {
    let details = json!([{ "location": location, "message": text }]);
    PokedexError::validation(text, Some(details))
}
