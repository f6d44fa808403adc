pub mod config;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::ConsoleConfig;
pub use session::{Identity, Session, SessionStore};
pub use storage::KeyValueStorage;
