//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Cookie signing key for flash messages; must be at least 64 bytes.
    pub secret: String,
    /// Value expected in the `X-API-KEY` header on `/api` requests.
    pub api_key: String,
}
