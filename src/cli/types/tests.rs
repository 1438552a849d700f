//! Unit tests for CLI name types

use super::*;
use crate::error::TeamupError;

#[test]
fn test_group_name_parse_trims() {
    let group: GroupName = "  U1  ".parse().unwrap();
    assert_eq!(group.as_str(), "U1");
    assert_eq!(group.to_string(), "U1");
}

#[test]
fn test_group_name_blank_rejected() {
    match "   ".parse::<GroupName>() {
        Err(TeamupError::EmptyGroupName) => (),
        other => panic!("Expected EmptyGroupName, got {:?}", other),
    }
}

#[test]
fn test_player_name_parse_trims() {
    let player: PlayerName = " Ana ".parse().unwrap();
    assert_eq!(player.as_str(), "Ana");
}

#[test]
fn test_player_name_blank_rejected() {
    match "".parse::<PlayerName>() {
        Err(TeamupError::EmptyPlayerName) => (),
        other => panic!("Expected EmptyPlayerName, got {:?}", other),
    }
}

#[test]
fn test_team_name_default_is_first_team() {
    assert_eq!(TeamName::default().as_str(), "Team A");
}

#[test]
fn test_team_name_parse() {
    let team: TeamName = "Team B".parse().unwrap();
    assert_eq!(team.as_str(), "Team B");

    match "  ".parse::<TeamName>() {
        Err(TeamupError::EmptyTeamName) => (),
        other => panic!("Expected EmptyTeamName, got {:?}", other),
    }
}
