//! Player commands: add, list, remove.

use crate::{
    cli::types::{GroupName, PlayerName, TeamName},
    storage::{PlayerRecord, StorageBackend, TeamStorage},
    Result,
};

/// Parameters for adding a person to a group's team.
#[derive(Debug)]
pub struct AddPlayerParams {
    pub name: PlayerName,
    pub group: GroupName,
    pub team: TeamName,
}

/// Add a person to a group, creating the group on first use.
pub fn handle_add_player<B: StorageBackend>(
    storage: &mut TeamStorage<B>,
    params: AddPlayerParams,
) -> Result<()> {
    let player = PlayerRecord::new(params.name.as_str(), params.team.as_str());
    storage.player_add_by_group(&player, params.group.as_str())?;

    println!(
        "Added {} to {} / {}",
        params.name, params.group, params.team
    );
    Ok(())
}

/// Parameters for listing a group's people.
#[derive(Debug)]
pub struct ListPlayersParams {
    pub group: GroupName,
    pub team: Option<TeamName>,
    pub as_json: bool,
}

/// List a group's people, the whole roster or one team.
pub fn handle_list_players<B: StorageBackend>(
    storage: &TeamStorage<B>,
    params: ListPlayersParams,
) -> Result<()> {
    let players = match &params.team {
        Some(team) => {
            storage.players_get_by_group_and_team(params.group.as_str(), team.as_str())?
        }
        None => storage.players_get_by_group(params.group.as_str())?,
    };

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        match &params.team {
            Some(team) => println!("No people on {} in {}.", team, params.group),
            None => println!("No people in {}.", params.group),
        }
        return Ok(());
    }

    for player in &players {
        println!("{:<24} {}", player.name, player.team);
    }
    println!("{} person(s)", players.len());

    Ok(())
}

/// Remove a person from a group. A name not in the group is a silent no-op.
pub fn handle_remove_player<B: StorageBackend>(
    storage: &mut TeamStorage<B>,
    name: &PlayerName,
    group: &GroupName,
) -> Result<()> {
    storage.player_remove_by_group(name.as_str(), group.as_str())?;

    println!("Removed {} from {}", name, group);
    Ok(())
}
