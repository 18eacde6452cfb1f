use serde::{Deserialize, Serialize};

/// Entry of a named-resource list, e.g. `{"name": "bulbasaur", "url": "..."}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub name: String,
    /// Link to the detail resource. Passed through untouched when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ItemSummary {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

/// Response envelope of the `/{resource}?limit=` list endpoint.
#[derive(Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<ItemSummary>,
}
