//! Request pipeline on top of the API client: normalize, fetch, shape.

use pokeapi::Client;

use crate::error::PokedexError;
use crate::format::{format_item_detail, ItemDetail};
use crate::pagination::{paginate, PaginatedResult};
use crate::validation::{normalize_identifier, validate_page_number, Identifier, PageInput};

/// API client wrapper that turns raw upstream responses into the public contract.
///
/// Every call goes to the network. There is no caching and no retrying: one
/// upstream failure is one failed call.
#[derive(Clone, Debug)]
pub struct PokedexClient {
    inner: Client,
}

impl PokedexClient {
    /// Wraps an already constructed API client.
    pub fn new(inner: Client) -> Self {
        Self { inner }
    }

    /// Creates a client against a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str) -> Result<Self, PokedexError> {
        Ok(Self::new(Client::with_base_url(base_url)?))
    }

    /// Returns one page of the name-sorted item list.
    ///
    /// The page is validated first, so anything missing or out of range lands on
    /// page 1. The full list is fetched on every call.
    pub async fn get_paginated_items<'a>(
        &self,
        page: impl Into<PageInput<'a>>,
    ) -> Result<PaginatedResult, PokedexError> {
        let validated_page = validate_page_number(page);
        let all = self.inner.fetch_all_item_summaries().await?;
        tracing::debug!(
            "Fetched {} item summaries for page {}",
            all.len(),
            validated_page
        );
        Ok(paginate(all, validated_page))
    }

    /// Fetches and formats one item by name or id.
    pub async fn get_item_details<'a>(
        &self,
        identifier: impl Into<Identifier<'a>>,
    ) -> Result<ItemDetail, PokedexError> {
        let normalized = normalize_identifier(identifier);
        let raw = self.inner.fetch_item_raw(&normalized).await?;
        format_item_detail(raw)
    }
}
