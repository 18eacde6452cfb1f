//! Process settings, read from flags with environment-variable fallbacks.

use std::net::{IpAddr, Ipv4Addr};

use clap::Parser;
use pokedex_lib::pokeapi::DEFAULT_BASE_URL;
use pokedex_lib::Environment;

/// Origin allowed by CORS when `ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://vigneshnethaji.com";

#[derive(Parser, Debug, Clone)]
#[command(name = "pokedex-server")]
#[command(about = "Read-only REST facade over PokeAPI")]
pub struct Settings {
    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Root URL of the upstream API
    #[arg(long = "base-url", env = "POKEAPI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Origins allowed by CORS outside development (comma separated)
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_ALLOWED_ORIGIN
    )]
    pub allowed_origins: Vec<String>,

    /// Deployment environment: development, production, or test
    #[arg(long = "env", env = "APP_ENV", default_value = "development")]
    pub environment: Environment,
}
