use serde::Serialize;

use crate::lobby::panel::{ConnectionStatus, Panel};
use crate::lobby::room::RoomInfo;
use crate::network::messages::ClientIntent;

/// One row of the room list. The join action is data, not a callback.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoomListRow {
    pub room_name: String,
    pub players: String,
    pub join: ClientIntent,
}

impl From<&RoomInfo> for RoomListRow {
    fn from(room: &RoomInfo) -> Self {
        Self {
            room_name: room.name.clone(),
            players: room.players_label(),
            join: ClientIntent::JoinRoom {
                room_name: room.name.clone(),
            },
        }
    }
}

pub fn build_rows(rooms: &[RoomInfo]) -> Vec<RoomListRow> {
    let mut rows: Vec<RoomListRow> = rooms.iter().map(RoomListRow::from).collect();
    rows.sort_by(|a, b| a.room_name.cmp(&b.room_name));
    rows
}

/// What the renderer gets to see after every message handled by the lobby actor.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct LobbyView {
    pub status: ConnectionStatus,
    pub panel: Panel,
    pub current_room: Option<String>,
    pub rows: Vec<RoomListRow>,
}
