//! Integration tests for the storage contract over the SQLite backend

use teamup::{PlayerRecord, SqliteBackend, StorageBackend, TeamStorage, TeamupError};

fn create_test_storage() -> TeamStorage<SqliteBackend> {
    TeamStorage::new(SqliteBackend::new_in_memory().unwrap())
}

#[test]
fn test_backend_creation() {
    let _storage = create_test_storage();
    // Should not panic - schema initialization successful
}

#[test]
fn test_sqlite_kv_roundtrip() {
    let mut backend = SqliteBackend::new_in_memory().unwrap();

    assert!(backend.get("missing").unwrap().is_none());

    backend.set("key", "value").unwrap();
    assert_eq!(backend.get("key").unwrap().as_deref(), Some("value"));

    backend.set("key", "updated").unwrap();
    assert_eq!(backend.get("key").unwrap().as_deref(), Some("updated"));

    backend.remove("key").unwrap();
    assert!(backend.get("key").unwrap().is_none());

    // Deleting a missing key is a no-op
    backend.remove("key").unwrap();
}

#[test]
fn test_team_split_scenario() {
    let mut storage = create_test_storage();

    storage
        .player_add_by_group(&PlayerRecord::new("Ana", "Team A"), "U1")
        .unwrap();
    storage
        .player_add_by_group(&PlayerRecord::new("Bea", "Team B"), "U1")
        .unwrap();

    let team_a = storage.players_get_by_group_and_team("U1", "Team A").unwrap();
    assert_eq!(team_a, vec![PlayerRecord::new("Ana", "Team A")]);

    let team_b = storage.players_get_by_group_and_team("U1", "Team B").unwrap();
    assert_eq!(team_b, vec![PlayerRecord::new("Bea", "Team B")]);
}

#[test]
fn test_duplicate_add_keeps_set_size() {
    let mut storage = create_test_storage();

    storage
        .player_add_by_group(&PlayerRecord::new("Ana", "Team A"), "U1")
        .unwrap();

    let result = storage.player_add_by_group(&PlayerRecord::new("Ana", "Team B"), "U1");
    match result {
        Err(TeamupError::DuplicatePlayer { name, group }) => {
            assert_eq!(name, "Ana");
            assert_eq!(group, "U1");
        }
        other => panic!("Expected DuplicatePlayer, got {:?}", other),
    }

    assert_eq!(storage.players_get_by_group("U1").unwrap().len(), 1);
}

#[test]
fn test_remove_missing_player_leaves_set_unchanged() {
    let mut storage = create_test_storage();

    storage
        .player_add_by_group(&PlayerRecord::new("Ana", "Team A"), "U1")
        .unwrap();

    storage.player_remove_by_group("Zoe", "U1").unwrap();

    let players = storage.players_get_by_group("U1").unwrap();
    assert_eq!(players, vec![PlayerRecord::new("Ana", "Team A")]);
}

#[test]
fn test_group_remove_leaves_no_orphans() {
    let mut storage = create_test_storage();

    storage
        .player_add_by_group(&PlayerRecord::new("Ana", "Team A"), "U1")
        .unwrap();
    storage
        .player_add_by_group(&PlayerRecord::new("Bea", "Team B"), "U1")
        .unwrap();

    storage.group_remove_by_name("U1").unwrap();

    assert!(storage
        .players_get_by_group_and_team("U1", "Team A")
        .unwrap()
        .is_empty());
    assert!(storage
        .players_get_by_group_and_team("U1", "Team B")
        .unwrap()
        .is_empty());
    assert!(storage.groups_get_all().unwrap().is_empty());
}

#[test]
fn test_insertion_order_preserved_per_team() {
    let mut storage = create_test_storage();

    for name in ["Cid", "Ana", "Bea"] {
        storage
            .player_add_by_group(&PlayerRecord::new(name, "Team A"), "U1")
            .unwrap();
    }

    let names: Vec<String> = storage
        .players_get_by_group_and_team("U1", "Team A")
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Cid", "Ana", "Bea"]);
}

#[test]
fn test_groups_are_isolated() {
    let mut storage = create_test_storage();

    storage
        .player_add_by_group(&PlayerRecord::new("Ana", "Team A"), "U1")
        .unwrap();
    storage
        .player_add_by_group(&PlayerRecord::new("Bea", "Team A"), "U2")
        .unwrap();

    storage.group_remove_by_name("U1").unwrap();

    let survivors = storage.players_get_by_group("U2").unwrap();
    assert_eq!(survivors, vec![PlayerRecord::new("Bea", "Team A")]);
    assert_eq!(storage.groups_get_all().unwrap(), vec!["U2".to_string()]);
}

#[test]
fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("teamup.db");

    {
        let mut storage = TeamStorage::new(SqliteBackend::open(&db_path).unwrap());
        storage.group_create("U1").unwrap();
        storage
            .player_add_by_group(&PlayerRecord::new("Ana", "Team A"), "U1")
            .unwrap();
    }

    let storage = TeamStorage::new(SqliteBackend::open(&db_path).unwrap());
    assert_eq!(storage.groups_get_all().unwrap(), vec!["U1".to_string()]);
    assert_eq!(
        storage.players_get_by_group_and_team("U1", "Team A").unwrap(),
        vec![PlayerRecord::new("Ana", "Team A")]
    );
}

#[test]
fn test_open_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("data").join("teamup.db");

    let _backend = SqliteBackend::open(&db_path).unwrap();
    assert!(db_path.exists());
}
