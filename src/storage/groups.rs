//! Group operations: create, list, remove with all associated players.

use super::backend::{players_key, StorageBackend};
use super::store::TeamStorage;
use crate::error::{Result, TeamupError};

impl<B: StorageBackend> TeamStorage<B> {
    /// Register a new group name.
    ///
    /// The name is trimmed and must be non-empty; registering a name that
    /// already exists fails with [`TeamupError::DuplicateGroup`].
    pub fn group_create(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TeamupError::EmptyGroupName);
        }

        let mut groups = self.load_groups()?;

        if groups.iter().any(|g| g == name) {
            return Err(TeamupError::DuplicateGroup {
                name: name.to_string(),
            });
        }

        groups.push(name.to_string());
        self.save_groups(&groups)
    }

    /// Registered group names in insertion order.
    pub fn groups_get_all(&self) -> Result<Vec<String>> {
        self.load_groups()
    }

    /// Delete a group: its player collection and its registry entry.
    ///
    /// Idempotent; removing an unknown group completes without error, and no
    /// player record of the group survives the deletion.
    pub fn group_remove_by_name(&mut self, name: &str) -> Result<()> {
        self.backend.remove(&players_key(name))?;

        let mut groups = self.load_groups()?;
        groups.retain(|g| g != name);
        self.save_groups(&groups)
    }

    /// Ensure a group name is registered, without failing when it already
    /// is. Used by the add-player path for implicit group creation.
    pub(crate) fn register_group(&mut self, name: &str) -> Result<()> {
        let mut groups = self.load_groups()?;
        if !groups.iter().any(|g| g == name) {
            groups.push(name.to_string());
            self.save_groups(&groups)?;
        }
        Ok(())
    }
}
