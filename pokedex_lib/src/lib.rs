//! Library layer for the Pokedex facade: input normalization, response shaping,
//! pagination, and error normalization around the `pokeapi` client.
//!
//! Everything here is request-scoped. Nothing is cached between calls.

pub mod client;
pub mod environment;
pub mod error;
pub mod format;
pub mod normalizer;
mod number;
pub mod pagination;
pub mod validation;

pub use pokeapi;
pub use pokeapi::types;

pub use client::PokedexClient;
pub use environment::Environment;
pub use error::{ApplicationError, PokedexError};
pub use format::ItemDetail;
pub use normalizer::{ErrorBody, ErrorNormalizer, NormalizedError};
pub use pagination::PaginatedResult;
