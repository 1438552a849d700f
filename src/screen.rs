//! State model for the players screen.
//!
//! Mirrors the interactive surface: an add-person form, a two-team filter
//! toggle, per-person removal, and group removal. The screen catches every
//! storage error and turns it into an [`Alert`]; nothing propagates out of a
//! handler. Fetching is modeled as a pure function of the current
//! (group, team) selection, split into [`PlayersScreen::start_fetch`] and
//! [`PlayersScreen::finish_fetch`] so that in-flight queries can complete in
//! any order: the most recently *completed* fetch wins the display state.

use crate::error::Result;
use crate::storage::{PlayerRecord, StorageBackend, TeamStorage};

/// The two team labels the filter toggles between.
pub const TEAMS: [&str; 2] = ["Team A", "Team B"];

/// A user-facing message the screen would surface as a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Token for an in-flight player query, carrying the filter it was issued
/// with so the result can be attributed correctly on completion.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub group: String,
    pub team: String,
}

/// Screen state for one group's roster.
pub struct PlayersScreen {
    group: String,
    team: String,
    input: String,
    players: Vec<PlayerRecord>,
    displayed_team: String,
    is_loading: bool,
    alerts: Vec<Alert>,
}

impl PlayersScreen {
    /// Open the screen for a group, with the first team pre-selected.
    pub fn new(group: &str) -> Self {
        Self {
            group: group.to_string(),
            team: TEAMS[0].to_string(),
            input: String::new(),
            players: Vec::new(),
            displayed_team: TEAMS[0].to_string(),
            is_loading: false,
            alerts: Vec::new(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Currently selected team filter.
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Team filter of the fetch whose result is currently displayed. Lags
    /// behind [`Self::team`] while a newer query is still in flight.
    pub fn displayed_team(&self) -> &str {
        &self.displayed_team
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Alerts surfaced so far, oldest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Type into the add-person form.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn push_alert(&mut self, title: &str, message: impl Into<String>) {
        self.alerts.push(Alert {
            title: title.to_string(),
            message: message.into(),
        });
    }

    /// Submit the add-person form.
    ///
    /// A blank name is rejected locally with an alert; the store is not
    /// called at all in that case.
    pub fn handle_add_player<B: StorageBackend>(&mut self, storage: &mut TeamStorage<B>) {
        if self.input.trim().is_empty() {
            self.push_alert("New person", "Enter the name of the person to add.");
            return;
        }

        let player = PlayerRecord::new(self.input.clone(), self.team.clone());

        match storage.player_add_by_group(&player, &self.group) {
            Ok(()) => {
                self.input.clear();
                self.fetch_players(storage);
            }
            Err(e) if e.is_user_error() => self.push_alert("New person", e.to_string()),
            Err(_) => self.push_alert("New person", "Could not add the person."),
        }
    }

    /// Begin a player query for the current (group, team) selection.
    pub fn start_fetch(&mut self) -> FetchRequest {
        self.is_loading = true;
        FetchRequest {
            group: self.group.clone(),
            team: self.team.clone(),
        }
    }

    /// Apply a completed query. Always overwrites the displayed list, so the
    /// most recently completed fetch wins regardless of issue order.
    pub fn finish_fetch(&mut self, request: FetchRequest, result: Result<Vec<PlayerRecord>>) {
        self.is_loading = false;
        match result {
            Ok(players) => {
                self.players = players;
                self.displayed_team = request.team;
            }
            Err(_) => {
                self.push_alert("People", "Could not load the people of the selected team.");
            }
        }
    }

    /// Synchronous fetch: start and finish against the store in one step.
    pub fn fetch_players<B: StorageBackend>(&mut self, storage: &TeamStorage<B>) {
        let request = self.start_fetch();
        let result = storage.players_get_by_group_and_team(&request.group, &request.team);
        self.finish_fetch(request, result);
    }

    /// Switch the team filter and refetch.
    pub fn select_team<B: StorageBackend>(&mut self, team: &str, storage: &TeamStorage<B>) {
        self.team = team.to_string();
        self.fetch_players(storage);
    }

    /// Remove one person and refresh the list.
    pub fn handle_remove_player<B: StorageBackend>(
        &mut self,
        player_name: &str,
        storage: &mut TeamStorage<B>,
    ) {
        match storage.player_remove_by_group(player_name, &self.group) {
            Ok(()) => self.fetch_players(storage),
            Err(_) => self.push_alert("Remove person", "Could not remove the person."),
        }
    }

    /// Remove the whole group. Returns whether the screen should close
    /// (navigation back to the group list on success).
    pub fn handle_remove_group<B: StorageBackend>(&mut self, storage: &mut TeamStorage<B>) -> bool {
        match storage.group_remove_by_name(&self.group) {
            Ok(()) => true,
            Err(_) => {
                self.push_alert("Remove group", "Could not remove the group.");
                false
            }
        }
    }
}
