//! Integration test driving the players screen against SQLite storage

use teamup::{screen::TEAMS, PlayersScreen, SqliteBackend, TeamStorage};

#[test]
fn test_screen_session_against_sqlite() {
    let mut storage = TeamStorage::new(SqliteBackend::new_in_memory().unwrap());
    let mut screen = PlayersScreen::new("U1");

    // Add one person to each team through the form
    screen.set_input("Ana");
    screen.handle_add_player(&mut storage);

    screen.select_team(TEAMS[1], &storage);
    screen.set_input("Bea");
    screen.handle_add_player(&mut storage);

    assert!(screen.alerts().is_empty());
    assert_eq!(screen.players().len(), 1);
    assert_eq!(screen.players()[0].name, "Bea");

    // Toggle back: the other team's list is intact
    screen.select_team(TEAMS[0], &storage);
    assert_eq!(screen.players().len(), 1);
    assert_eq!(screen.players()[0].name, "Ana");

    // Blank submission alerts without touching the stored data
    screen.set_input("  ");
    screen.handle_add_player(&mut storage);
    assert_eq!(screen.alerts().len(), 1);
    assert_eq!(storage.players_get_by_group("U1").unwrap().len(), 2);

    // Remove one person, then the whole group
    screen.handle_remove_player("Ana", &mut storage);
    assert!(screen.players().is_empty());

    assert!(screen.handle_remove_group(&mut storage));
    assert!(storage.groups_get_all().unwrap().is_empty());
    assert!(storage.players_get_by_group("U1").unwrap().is_empty());
}
