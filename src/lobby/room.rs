use serde::{Deserialize, Serialize};
use std::fmt;

/// Room record as broadcast by the matchmaking service while in the lobby.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomInfo {
    pub name: String,
    pub is_open: bool,
    pub is_visible: bool,
    #[serde(default)]
    pub removed_from_list: bool, // true once the service delists it (closed, hidden or full)
    pub player_count: u8,
    pub max_players: u8,
}

impl RoomInfo {
    const DEFAULT_MAX_PLAYERS: u8 = 4;

    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_open: true,
            is_visible: true,
            removed_from_list: false,
            player_count: 0,
            max_players: Self::DEFAULT_MAX_PLAYERS,
        }
    }

    pub fn with_players(mut self, player_count: u8, max_players: u8) -> Self {
        self.player_count = player_count;
        self.max_players = max_players;
        self
    }

    pub fn closed(mut self) -> Self {
        self.is_open = false;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    pub fn removed(mut self) -> Self {
        self.removed_from_list = true;
        self
    }

    /// A room belongs in the lobby listing only while it is open, visible and not delisted.
    pub fn is_listable(&self) -> bool {
        self.is_open && self.is_visible && !self.removed_from_list
    }

    pub fn players_label(&self) -> String {
        format!("{} / {}", self.player_count, self.max_players)
    }
}

impl fmt::Display for RoomInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.players_label())
    }
}
