//! Error types for the teamup roster CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TeamupError>;

#[derive(Error, Debug)]
pub enum TeamupError {
    #[error("Enter the name of the person to add.")]
    EmptyPlayerName,

    #[error("Enter a name for the new group.")]
    EmptyGroupName,

    #[error("Team label cannot be blank.")]
    EmptyTeamName,

    #[error("{name} is already registered in group {group}.")]
    DuplicatePlayer { name: String, group: String },

    #[error("A group named {name} already exists.")]
    DuplicateGroup { name: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl TeamupError {
    /// Whether the message is meant for the user verbatim (validation and
    /// duplicate errors) rather than a storage failure reported generically.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TeamupError::EmptyPlayerName
                | TeamupError::EmptyGroupName
                | TeamupError::EmptyTeamName
                | TeamupError::DuplicatePlayer { .. }
                | TeamupError::DuplicateGroup { .. }
        )
    }
}
