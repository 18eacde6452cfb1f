//! Upstream detail payload, reduced to the fields the facade reads.

use serde::{Deserialize, Serialize};

/// `{"name": "...", "url": "..."}` reference to another resource.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One entry of the `types` array: `{"slot": 1, "type": {"name": "electric"}}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: Option<u32>,
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

/// One entry of the `moves` array: `{"move": {"name": "thunder-shock"}}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub technique: NamedRef,
}

/// Detail record returned by `/{resource}/{id}`.
///
/// `height` is in decimetres and `weight` in hectograms. `sprites` is kept as raw
/// JSON since its nesting varies between records.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawItem {
    pub id: i64,
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub sprites: Option<serde_json::Value>,
    pub height: f64,
    pub weight: f64,
}
