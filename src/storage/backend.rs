//! Key-value backend trait and storage key layout.

use crate::error::Result;

/// Prefix shared by every key this application writes, so unrelated data in a
/// shared database stays untouched.
pub const KEY_PREFIX: &str = "@teamup";

/// Key holding the JSON array of registered group names.
pub const GROUPS_KEY: &str = "@teamup:groups";

/// Key holding the JSON array of player records for one group.
pub fn players_key(group: &str) -> String {
    format!("{}:players:{}", KEY_PREFIX, group)
}

/// Minimal key-value persistence interface.
///
/// `TeamStorage` performs every mutation as a read-modify-write of one
/// collection value, so a backend only needs atomicity per `set` call.
/// Implementations return `Err` for backend failures; a missing key is
/// `Ok(None)`, never an error.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting a missing key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}
