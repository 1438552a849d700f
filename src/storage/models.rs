//! Data models for the storage layer

use serde::{Deserialize, Serialize};

/// One person on a roster: the name is the removal key, unique within its
/// group; the team is a free-form label the UI constrains to a fixed pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
        }
    }
}
