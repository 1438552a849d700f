//! teamup — organize people into groups and teams
//!
//! A small roster organizer backed by local key-value persistence: people are
//! added to a *group* (one roster/event), split across the group's *teams*,
//! listed per team, removed individually, or removed wholesale by deleting
//! the group.
//!
//! ## Features
//!
//! - **Group-scoped rosters**: each group owns an ordered collection of
//!   (name, team) records; names are unique group-wide
//! - **Team filtering**: order-preserving queries by team label
//! - **Idempotent removal**: removing an absent person or group is a no-op
//! - **Pluggable persistence**: a key-value backend trait with SQLite and
//!   in-memory implementations
//! - **Screen state model**: the interactive Players screen as explicit
//!   state transitions, alerts included
//!
//! ## Quick Start
//!
//! ```rust
//! use teamup::{MemoryBackend, PlayerRecord, TeamStorage};
//!
//! # fn example() -> teamup::Result<()> {
//! let mut storage = TeamStorage::new(MemoryBackend::new());
//!
//! storage.player_add_by_group(&PlayerRecord::new("Ana", "Team A"), "U1")?;
//! storage.player_add_by_group(&PlayerRecord::new("Bea", "Team B"), "U1")?;
//!
//! let team_a = storage.players_get_by_group_and_team("U1", "Team A")?;
//! assert_eq!(team_a.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod screen;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GroupName, PlayerName, TeamName};
pub use error::{Result, TeamupError};
pub use screen::{Alert, PlayersScreen};
pub use storage::{MemoryBackend, PlayerRecord, SqliteBackend, StorageBackend, TeamStorage};
