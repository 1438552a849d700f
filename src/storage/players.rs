//! Player operations: add to a group, list by team, remove by name.

use super::backend::StorageBackend;
use super::models::PlayerRecord;
use super::store::TeamStorage;
use crate::error::{Result, TeamupError};

impl<B: StorageBackend> TeamStorage<B> {
    /// Add a player to a group's collection.
    ///
    /// The name is trimmed before it is stored and must be non-empty.
    /// Uniqueness is group-wide, not team-scoped, so the same person cannot
    /// appear on two teams of one group at once; a duplicate name fails with
    /// [`TeamupError::DuplicatePlayer`] instead of overwriting.
    ///
    /// Adding under an unknown group name creates the group implicitly and
    /// registers it in the group list.
    pub fn player_add_by_group(&mut self, player: &PlayerRecord, group: &str) -> Result<()> {
        let name = player.name.trim();
        if name.is_empty() {
            return Err(TeamupError::EmptyPlayerName);
        }

        let mut players = self.load_players(group)?;

        if players.iter().any(|p| p.name == name) {
            return Err(TeamupError::DuplicatePlayer {
                name: name.to_string(),
                group: group.to_string(),
            });
        }

        players.push(PlayerRecord::new(name, player.team.clone()));
        self.save_players(group, &players)?;
        self.register_group(group)?;

        Ok(())
    }

    /// Get every player in a group, in insertion order. An unknown group
    /// yields an empty list.
    pub fn players_get_by_group(&self, group: &str) -> Result<Vec<PlayerRecord>> {
        self.load_players(group)
    }

    /// Get the players of one team within a group, preserving insertion
    /// order. Read-only.
    pub fn players_get_by_group_and_team(
        &self,
        group: &str,
        team: &str,
    ) -> Result<Vec<PlayerRecord>> {
        let players = self.load_players(group)?;
        Ok(players.into_iter().filter(|p| p.team == team).collect())
    }

    /// Remove the named player from a group's collection.
    ///
    /// Removing a name that is not present is a no-op, not an error; the
    /// (possibly unchanged) collection is persisted either way.
    pub fn player_remove_by_group(&mut self, player_name: &str, group: &str) -> Result<()> {
        let mut players = self.load_players(group)?;
        players.retain(|p| p.name != player_name);
        self.save_players(group, &players)
    }
}
