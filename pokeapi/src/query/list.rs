use url::Url;

use super::Query;

/// Upper bound on the number of resources requested in a single list call.
pub const DEFAULT_LIST_LIMIT: u32 = 1000;

/// Size parameter for a named-resource list endpoint (`?limit=`).
#[derive(Clone, Copy, Debug)]
pub struct ListQuery {
    /// Maximum number of entries returned.
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl Query for ListQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string());
        url
    }
}
