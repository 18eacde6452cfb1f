//! HTTP client for the PokeAPI REST service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ListQuery, Query},
    types::{ItemSummary, ResourceList},
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Resource collection the facade reads from.
const RESOURCE: &str = "pokemon";

/// Request timeout applied by the underlying transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the PokeAPI REST service.
///
/// Holds one `reqwest::Client` (and so one connection pool) for its whole
/// lifetime. Cloning is cheap and shares the pool.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://pokeapi.co/api/v2`.
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the public PokeAPI.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pokedex-facade/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::request_failed(e)
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.to_string(),
        })
    }

    fn get_url(&self, segments: &[&str], query: Option<&impl Query>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::request_failed(e)
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
                Error::request_failed("base URL cannot carry a path")
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, segments: &[&str], query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(segments, query)?;
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::request_failed(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::request_failed(e)
        })?;

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::request_failed(e)
        })?;

        Ok(parsed)
    }

    /// Fetches every entry of the collection in one bounded list call
    /// (`?limit=1000`) and returns the `results` array as received.
    pub async fn fetch_all_item_summaries(&self) -> Result<Vec<ItemSummary>, Error> {
        let list = self
            .get::<ResourceList, ListQuery>(&[RESOURCE], Some(&ListQuery::default()))
            .await?;
        Ok(list.results)
    }

    /// Fetches the raw detail record for an already-normalized identifier.
    pub async fn fetch_item_raw(&self, identifier: &str) -> Result<serde_json::Value, Error> {
        self.get::<serde_json::Value, ListQuery>(&[RESOURCE, identifier], None)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_segments() {
        let client = Client::with_base_url("http://localhost:9000/api/v2/").unwrap();
        let url = client
            .get_url(&["pokemon", "mr mime"], None::<&ListQuery>)
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/api/v2/pokemon/mr%20mime");
    }

    #[test]
    fn list_url_carries_limit() {
        let client = Client::with_base_url("http://localhost:9000").unwrap();
        let url = client
            .get_url(&["pokemon"], Some(&ListQuery::default()))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/pokemon?limit=1000");
    }

    #[test]
    fn invalid_base_url_is_a_request_failure() {
        let client = Client::with_base_url("not a url").unwrap();
        let err = client
            .get_url(&["pokemon"], None::<&ListQuery>)
            .unwrap_err();
        assert!(matches!(err, Error::RequestFailed { .. }));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
    }
}
