//! Common utilities shared across commands.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::{
    storage::{SqliteBackend, TeamStorage},
    Result,
};

/// Context containing the storage handle used by every command
pub struct CommandContext {
    pub storage: TeamStorage<SqliteBackend>,
}

impl CommandContext {
    /// Open the database, honoring an explicit `--db` override.
    pub fn new(db_override: Option<&Path>) -> Result<Self> {
        let backend = match db_override {
            Some(path) => SqliteBackend::open(path)?,
            None => SqliteBackend::new()?,
        };

        Ok(Self {
            storage: TeamStorage::new(backend),
        })
    }
}

/// Ask a yes/no question on the terminal, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
