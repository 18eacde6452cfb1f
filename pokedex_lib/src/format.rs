//! Reshapes upstream detail records into the public `ItemDetail` contract.

use pokeapi::types::RawItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PokedexError;

/// Number of moves kept from the upstream list.
pub const MAX_MOVES: usize = 5;

/// Sprite locations tried in order. The first non-empty string wins.
const SPRITE_FALLBACKS: [&str; 3] = [
    "/front_default",
    "/other/official-artwork/front_default",
    "/other/home/front_default",
];

/// Public detail view of one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub name: String,
    pub id: i64,
    pub types: Vec<String>,
    /// At most [`MAX_MOVES`] entries, in upstream order.
    pub moves: Vec<String>,
    pub sprite: Option<String>,
    /// Metres.
    #[serde(serialize_with = "crate::number::serialize_f64_compact")]
    pub height: f64,
    /// Kilograms.
    #[serde(serialize_with = "crate::number::serialize_f64_compact")]
    pub weight: f64,
}

/// Picks the best available sprite URL, tolerating missing or oddly typed
/// nodes anywhere in the tree.
pub fn extract_sprite_url(sprites: Option<&Value>) -> Option<String> {
    let sprites = sprites?;
    SPRITE_FALLBACKS
        .iter()
        .filter_map(|pointer| sprites.pointer(pointer))
        .filter_map(Value::as_str)
        .find(|url| !url.is_empty())
        .map(str::to_string)
}

/// Decodes a raw upstream record and formats it.
///
/// Records whose `types` or `moves` are missing or not in the
/// `[{ "type": { "name" } }]` / `[{ "move": { "name" } }]` shape are rejected
/// as [`PokedexError::Unexpected`].
pub fn format_item_detail(raw: Value) -> Result<ItemDetail, PokedexError> {
    let item: RawItem = serde_json::from_value(raw)?;
    Ok(format_raw_item(item))
}

/// Formats an already decoded record.
pub fn format_raw_item(item: RawItem) -> ItemDetail {
    let sprite = extract_sprite_url(item.sprites.as_ref());
    ItemDetail {
        name: item.name,
        id: item.id,
        types: item.types.into_iter().map(|slot| slot.kind.name).collect(),
        moves: item
            .moves
            .into_iter()
            .take(MAX_MOVES)
            .map(|slot| slot.technique.name)
            .collect(),
        sprite,
        height: item.height / 10.0,
        weight: item.weight / 10.0,
    }
}
