//! Name types for groups and players.

use crate::error::{Result, TeamupError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for group names.
///
/// Parsing trims surrounding whitespace and rejects blank input, so a
/// `GroupName` always carries a usable storage key.
///
/// # Examples
///
/// ```rust
/// use teamup::GroupName;
///
/// let group: GroupName = " U1 ".parse().unwrap();
/// assert_eq!(group.as_str(), "U1");
/// assert!("   ".parse::<GroupName>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupName(String);

impl GroupName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroupName {
    type Err = TeamupError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TeamupError::EmptyGroupName);
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Type-safe wrapper for player names, trimmed and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerName {
    type Err = TeamupError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TeamupError::EmptyPlayerName);
        }
        Ok(Self(trimmed.to_string()))
    }
}
