//! Key/value storage used to persist the console session between page loads.

/// Synchronous string storage, shaped after the browser's `localStorage`.
///
/// Implementations never fail loudly: a broken backend behaves like an empty
/// one, since the remote API stays the source of truth for everything except
/// the bearer token.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
