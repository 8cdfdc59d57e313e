use rand::Rng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Settings;
use crate::errors::validation::{parse_max_players, validate_player_name, validate_room_name};
use crate::lobby::panel::{ConnectionStatus, Panel};
use crate::lobby::room_list_cache::RoomListCache;
use crate::lobby::room_list_view::{build_rows, LobbyView};
use crate::network::messages::{ClientIntent, ServiceEvent, ServiceRequest};
use crate::{AppError, AppResult};

/// Client-side state of one connection to the matchmaking service.
///
/// The session is the only owner of the room list cache. The cache exists
/// while the client is in the lobby and is dropped as soon as it leaves.
pub struct LobbySession {
    id: String,
    nickname: Option<String>,
    status: ConnectionStatus,
    active_panel: Panel,
    current_room: Option<String>,
    room_list: Option<RoomListCache>,
    default_max_players: u8,
    room_name_prefix: String,
}

impl LobbySession {
    pub fn new(settings: &Settings) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            nickname: None,
            status: ConnectionStatus::Disconnected,
            active_panel: Panel::Login,
            current_room: None,
            room_list: None,
            default_max_players: settings.default_max_players,
            room_name_prefix: settings.room_name_prefix.clone(),
        }
    }

    pub fn handle_intent(&mut self, intent: ClientIntent) -> AppResult<Vec<ServiceRequest>> {
        match intent {
            ClientIntent::Login { player_name } => {
                if self.status != ConnectionStatus::Disconnected {
                    return Err(AppError::AlreadyConnected {
                        nickname: self.nickname.clone().unwrap_or_default(),
                    });
                }
                if let Err(error) = validate_player_name(&player_name) {
                    debug!(session = %self.id, "Player name is invalid!");
                    return Err(error);
                }
                self.nickname = Some(player_name.clone());
                self.status = ConnectionStatus::Connecting;
                Ok(vec![ServiceRequest::Connect {
                    nickname: player_name,
                }])
            }

            ClientIntent::ShowRoomList => {
                self.require_connection("show the room list")?;
                let mut requests = Vec::new();
                // Room list updates only reach clients that are in the lobby
                if !matches!(
                    self.status,
                    ConnectionStatus::InLobby | ConnectionStatus::JoiningLobby
                ) {
                    self.status = ConnectionStatus::JoiningLobby;
                    requests.push(ServiceRequest::JoinLobby);
                }
                self.activate_panel(Panel::RoomList);
                Ok(requests)
            }

            ClientIntent::CreateRoom {
                room_name,
                max_players,
            } => {
                self.require_connection("create a room")?;
                let room_name = if room_name.is_empty() {
                    self.random_room_name()
                } else {
                    validate_room_name(&room_name)?;
                    room_name
                };
                let max_players = parse_max_players(&max_players, self.default_max_players)?;
                Ok(vec![ServiceRequest::CreateRoom {
                    room_name,
                    max_players,
                }])
            }

            ClientIntent::CancelCreateRoom => {
                self.activate_panel(Panel::GameOptions);
                Ok(Vec::new())
            }

            ClientIntent::ActivatePanel { panel } => {
                self.activate_panel(panel);
                Ok(Vec::new())
            }

            ClientIntent::JoinRoom { room_name } => {
                self.require_connection("join a room")?;
                let mut requests = Vec::new();
                // No need to stay in the lobby once a room is picked
                if self.status == ConnectionStatus::InLobby {
                    requests.push(ServiceRequest::LeaveLobby);
                }
                self.status = ConnectionStatus::JoiningRoom;
                requests.push(ServiceRequest::JoinRoom { room_name });
                Ok(requests)
            }
        }
    }

    pub fn handle_event(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::Connected => {
                info!(session = %self.id, "connected to the network");
            }
            ServiceEvent::ConnectedToMaster => {
                info!(
                    session = %self.id,
                    nickname = self.nickname.as_deref().unwrap_or_default(),
                    "connected to master server"
                );
                self.status = ConnectionStatus::ConnectedToMaster;
                self.activate_panel(Panel::GameOptions);
            }
            ServiceEvent::JoinedLobby => {
                info!(session = %self.id, "joined lobby");
                self.status = ConnectionStatus::InLobby;
                self.room_list = Some(RoomListCache::new());
            }
            ServiceEvent::LeftLobby => {
                info!(session = %self.id, "left lobby");
                self.room_list = None;
                if self.status != ConnectionStatus::JoiningRoom {
                    self.status = ConnectionStatus::ConnectedToMaster;
                }
            }
            ServiceEvent::RoomListUpdate { rooms } => match self.room_list.as_mut() {
                Some(room_list) => {
                    debug!(session = %self.id, updates = rooms.len(), "applying room list update");
                    room_list.apply_update_batch(rooms);
                }
                None => {
                    warn!(
                        session = %self.id,
                        updates = rooms.len(),
                        "room list update received outside the lobby, ignoring"
                    );
                }
            },
            ServiceEvent::CreatedRoom { room_name } => {
                info!(session = %self.id, room = %room_name, "room created");
            }
            ServiceEvent::JoinedRoom { room_name } => {
                info!(
                    session = %self.id,
                    nickname = self.nickname.as_deref().unwrap_or_default(),
                    room = %room_name,
                    "joined room"
                );
                self.status = ConnectionStatus::InRoom;
                self.room_list = None;
                self.current_room = Some(room_name);
                self.activate_panel(Panel::InsideRoom);
            }
            ServiceEvent::Disconnected { cause } => {
                warn!(session = %self.id, %cause, "disconnected from service");
                self.status = ConnectionStatus::Disconnected;
                self.room_list = None;
                self.current_room = None;
                self.activate_panel(Panel::Login);
            }
        }
    }

    pub fn activate_panel(&mut self, panel: Panel) {
        self.active_panel = panel;
    }

    pub fn view(&self) -> LobbyView {
        LobbyView {
            status: self.status,
            panel: self.active_panel,
            current_room: self.current_room.clone(),
            rows: self
                .room_list
                .as_ref()
                .map(|room_list| build_rows(&room_list.snapshot()))
                .unwrap_or_default(),
        }
    }

    pub fn room_list(&self) -> Option<&RoomListCache> {
        self.room_list.as_ref()
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn active_panel(&self) -> Panel {
        self.active_panel
    }

    pub fn current_room(&self) -> Option<&str> {
        self.current_room.as_deref()
    }

    fn require_connection(&self, action: &str) -> AppResult<()> {
        if self.status.is_connected() {
            Ok(())
        } else {
            Err(AppError::NotConnected {
                action: action.to_string(),
            })
        }
    }

    fn random_room_name(&self) -> String {
        let number = rand::rng().random_range(1..1000);
        format!("{} {}", self.room_name_prefix, number)
    }
}
