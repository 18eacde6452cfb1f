//! HTTP surface of the Pokedex facade: settings, logging, routing, handlers.

pub mod app;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod settings;

pub use app::{build_router, AppState};
pub use settings::Settings;
