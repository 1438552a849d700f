//! Storage handle and collection (de)serialization.

use super::backend::{players_key, StorageBackend, GROUPS_KEY};
use super::models::PlayerRecord;
use crate::error::Result;

/// Handle over a key-value backend holding every roster collection.
///
/// Player operations live in [`super::players`], group operations in
/// [`super::groups`]. Each collection (the group-name registry and one
/// player list per group) is stored whole as a JSON document, so every
/// mutation is a read-modify-write of a single key.
pub struct TeamStorage<B: StorageBackend> {
    pub(crate) backend: B,
}

impl<B: StorageBackend> TeamStorage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying backend, mainly for tests.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the ordered player collection for a group, empty if the group
    /// has no stored collection yet.
    pub(crate) fn load_players(&self, group: &str) -> Result<Vec<PlayerRecord>> {
        match self.backend.get(&players_key(group))? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Persist the whole player collection for a group.
    pub(crate) fn save_players(&mut self, group: &str, players: &[PlayerRecord]) -> Result<()> {
        let raw = serde_json::to_string(players)?;
        self.backend.set(&players_key(group), &raw)
    }

    /// Load the registered group names in insertion order.
    pub(crate) fn load_groups(&self) -> Result<Vec<String>> {
        match self.backend.get(GROUPS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Persist the group-name registry.
    pub(crate) fn save_groups(&mut self, groups: &[String]) -> Result<()> {
        let raw = serde_json::to_string(groups)?;
        self.backend.set(GROUPS_KEY, &raw)
    }
}
