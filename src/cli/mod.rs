//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{GroupName, PlayerName, TeamName};

/// Storage location arguments shared by every command
#[derive(Debug, Args)]
pub struct StorageArgs {
    /// Path to the database file (defaults to the platform data directory).
    #[clap(long)]
    pub db: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "teamup", about = "Organize people into groups and teams")]
pub struct Teamup {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage groups (one roster/event each)
    Group {
        #[clap(subcommand)]
        cmd: GroupCmd,
    },

    /// Manage the people of a group
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum GroupCmd {
    /// Register a new group.
    Create {
        /// Name of the group to create.
        name: GroupName,

        #[clap(flatten)]
        storage: StorageArgs,
    },

    /// List every registered group.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        #[clap(flatten)]
        storage: StorageArgs,
    },

    /// Remove a group and every person in it.
    Remove {
        /// Name of the group to remove.
        name: GroupName,

        /// Skip the confirmation prompt.
        #[clap(long, short)]
        yes: bool,

        #[clap(flatten)]
        storage: StorageArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Add a person to one of a group's teams.
    ///
    /// The group is created implicitly on first use. A name already present
    /// anywhere in the group is rejected, whichever team it is on.
    Add {
        /// Name of the person to add.
        name: PlayerName,

        /// Group to add the person to.
        #[clap(long, short)]
        group: GroupName,

        /// Team within the group.
        #[clap(long, short, default_value_t = TeamName::default())]
        team: TeamName,

        #[clap(flatten)]
        storage: StorageArgs,
    },

    /// List the people of a group, optionally filtered to one team.
    List {
        /// Group to list.
        #[clap(long, short)]
        group: GroupName,

        /// Only show this team.
        #[clap(long, short)]
        team: Option<TeamName>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        #[clap(flatten)]
        storage: StorageArgs,
    },

    /// Remove a person from a group.
    ///
    /// Removing a name that is not in the group is a silent no-op.
    Remove {
        /// Name of the person to remove.
        name: PlayerName,

        /// Group to remove the person from.
        #[clap(long, short)]
        group: GroupName,

        #[clap(flatten)]
        storage: StorageArgs,
    },
}
