//! Team label type.

use crate::error::{Result, TeamupError};
use crate::screen::TEAMS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for team labels within a group.
///
/// The label is free-form in storage; the interactive surface constrains it
/// to the fixed [`TEAMS`] pair, and the first of those is the default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamName(String);

impl TeamName {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TeamName {
    fn default() -> Self {
        Self(TEAMS[0].to_string())
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamName {
    type Err = TeamupError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TeamupError::EmptyTeamName);
        }
        Ok(Self(trimmed.to_string()))
    }
}
