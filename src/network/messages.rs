use serde::{Deserialize, Serialize};

use crate::lobby::panel::Panel;
use crate::lobby::room::RoomInfo;
use crate::AppResult;

/// Notifications delivered by the matchmaking service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum ServiceEvent {
    Connected,
    ConnectedToMaster,
    JoinedLobby,
    LeftLobby,
    RoomListUpdate { rooms: Vec<RoomInfo> },
    CreatedRoom { room_name: String },
    JoinedRoom { room_name: String },
    Disconnected { cause: String },
}

/// What the user asked for through the UI.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum ClientIntent {
    Login {
        player_name: String,
    },
    ShowRoomList,
    CreateRoom {
        room_name: String,
        max_players: String,
    },
    CancelCreateRoom,
    ActivatePanel {
        panel: Panel,
    },
    JoinRoom {
        room_name: String,
    },
}

/// Requests forwarded to the matchmaking service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum ServiceRequest {
    Connect { nickname: String },
    JoinLobby,
    LeaveLobby,
    CreateRoom { room_name: String, max_players: u8 },
    JoinRoom { room_name: String },
}

/// One line of input to the client binary.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum InboundFrame {
    Service(ServiceEvent),
    Intent(ClientIntent),
}

pub fn deserialize_frame(json: &str) -> AppResult<InboundFrame> {
    Ok(serde_json::from_str(json)?)
}

pub fn serialize_request(request: &ServiceRequest) -> AppResult<String> {
    Ok(serde_json::to_string(request)?)
}
