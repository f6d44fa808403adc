//! Shared API client constructor for the console.
//!
//! Returns an [`api::ApiClient`] whose session lives in the appropriate
//! [`store::KeyValueStorage`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native** (tests, tooling): process memory via [`store::MemoryStorage`]

use api::{ApiClient, HttpTransport};
use dioxus::prelude::*;
use store::{ConsoleConfig, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type ConsoleStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type ConsoleStorage = store::MemoryStorage;

pub type ConsoleClient = ApiClient<HttpTransport, ConsoleStorage>;

const BUNDLED_CONFIG: &str = include_str!("../../../console.toml");

/// Read the bundled `console.toml`.
///
/// A broken file falls back to the defaults. `ADMIN_CONSOLE_API_URL`, when set
/// at build time, overrides `api.base_url`.
pub fn load_config() -> ConsoleConfig {
    let config = match ConsoleConfig::from_toml(BUNDLED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {e}", ConsoleConfig::filename());
            ConsoleConfig::default()
        }
    };
    match option_env!("ADMIN_CONSOLE_API_URL") {
        Some(url) if !url.is_empty() => config.with_base_url(url),
        _ => config,
    }
}

/// Build the console's client for `config`.
pub fn make_client(config: &ConsoleConfig) -> ConsoleClient {
    let transport = HttpTransport::new(config.api.base_url.clone());
    ApiClient::new(transport, SessionStore::new(ConsoleStorage::default()))
}

/// The client provided by the app root.
pub fn use_client() -> ConsoleClient {
    use_context::<ConsoleClient>()
}
