//! Group commands: create, list, remove.

use super::common::confirm;
use crate::{
    cli::types::GroupName,
    storage::{StorageBackend, TeamStorage},
    Result,
};

/// Register a new group.
pub fn handle_group_create<B: StorageBackend>(
    storage: &mut TeamStorage<B>,
    name: &GroupName,
) -> Result<()> {
    storage.group_create(name.as_str())?;

    println!("Created group {}", name);
    Ok(())
}

/// List registered groups with their headcounts.
pub fn handle_list_groups<B: StorageBackend>(
    storage: &TeamStorage<B>,
    as_json: bool,
) -> Result<()> {
    let groups = storage.groups_get_all()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        println!("No groups registered yet.");
        return Ok(());
    }

    for group in &groups {
        let count = storage.players_get_by_group(group)?.len();
        println!("{:<24} {} person(s)", group, count);
    }

    Ok(())
}

/// Remove a group and all of its people, prompting first unless `assume_yes`.
pub fn handle_remove_group<B: StorageBackend>(
    storage: &mut TeamStorage<B>,
    name: &GroupName,
    assume_yes: bool,
) -> Result<()> {
    if !assume_yes {
        let prompt = format!("Really remove group {} and everyone in it?", name);
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    storage.group_remove_by_name(name.as_str())?;

    println!("Removed group {}", name);
    Ok(())
}
