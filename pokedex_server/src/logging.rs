//! `tracing` subscriber setup.

use pokedex_lib::Environment;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins when set; otherwise the
/// environment picks the level. Production logs are JSON lines.
pub fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_level()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if environment.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}
