use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Login,
    GameOptions,
    CreateRoom,
    RoomList,
    InsideRoom,
    JoinRandomRoom,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    ConnectedToMaster,
    JoiningLobby,
    InLobby,
    JoiningRoom,
    InRoom,
}

impl ConnectionStatus {
    /// True once the master server has accepted us, whatever we are doing since.
    pub fn is_connected(&self) -> bool {
        !matches!(
            self,
            ConnectionStatus::Disconnected | ConnectionStatus::Connecting
        )
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Connection status : {:?}", self)
    }
}
