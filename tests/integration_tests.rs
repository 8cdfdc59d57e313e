// tests/integration_tests.rs

use room_lobby_client::config::Settings;
use room_lobby_client::lobby::panel::{ConnectionStatus, Panel};
use room_lobby_client::network::messages::{
    deserialize_frame, ClientIntent, ServiceEvent, ServiceRequest,
};
use room_lobby_client::{LobbyActor, LobbyMessage, LobbySession, RoomInfo};
use room_lobby_client::lobby::room_list_view::LobbyView;
use tokio::sync::{mpsc, watch};

fn spawn_actor() -> (
    mpsc::UnboundedSender<LobbyMessage>,
    mpsc::UnboundedReceiver<ServiceRequest>,
    watch::Receiver<LobbyView>,
    tokio::task::JoinHandle<()>,
) {
    let (request_sender, request_receiver) = mpsc::unbounded_channel();
    let (lobby_sender, lobby_receiver) = mpsc::unbounded_channel();
    let (mut actor, view_receiver) =
        LobbyActor::new(LobbySession::new(&Settings::default()), request_sender);
    let handle = tokio::spawn(async move { actor.run(lobby_receiver).await });
    (lobby_sender, request_receiver, view_receiver, handle)
}

#[tokio::test]
async fn test_lobby_browse_and_join_workflow() {
    let (lobby, mut requests, mut view, handle) = spawn_actor();

    lobby
        .send(LobbyMessage::Intent(ClientIntent::Login {
            player_name: "Alice".to_string(),
        }))
        .unwrap();
    lobby
        .send(LobbyMessage::Service(ServiceEvent::Connected))
        .unwrap();
    lobby
        .send(LobbyMessage::Service(ServiceEvent::ConnectedToMaster))
        .unwrap();
    lobby
        .send(LobbyMessage::Intent(ClientIntent::ShowRoomList))
        .unwrap();
    lobby
        .send(LobbyMessage::Service(ServiceEvent::JoinedLobby))
        .unwrap();
    lobby
        .send(LobbyMessage::Service(ServiceEvent::RoomListUpdate {
            rooms: vec![
                RoomInfo::new("Room 12").with_players(1, 4),
                RoomInfo::new("Closed").closed(),
            ],
        }))
        .unwrap();
    lobby
        .send(LobbyMessage::Service(ServiceEvent::RoomListUpdate {
            rooms: vec![
                RoomInfo::new("Room 12").with_players(2, 4),
                RoomInfo::new("Other").with_players(0, 2),
            ],
        }))
        .unwrap();

    // The UI joins through the intent carried by the row itself
    lobby
        .send(LobbyMessage::Intent(ClientIntent::JoinRoom {
            room_name: "Room 12".to_string(),
        }))
        .unwrap();

    assert_eq!(
        requests.recv().await,
        Some(ServiceRequest::Connect {
            nickname: "Alice".to_string()
        })
    );
    assert_eq!(requests.recv().await, Some(ServiceRequest::JoinLobby));
    assert_eq!(requests.recv().await, Some(ServiceRequest::LeaveLobby));
    assert_eq!(
        requests.recv().await,
        Some(ServiceRequest::JoinRoom {
            room_name: "Room 12".to_string()
        })
    );

    let rows = view
        .wait_for(|v| v.status == ConnectionStatus::JoiningRoom)
        .await
        .unwrap()
        .rows
        .clone();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].room_name, "Other");
    assert_eq!(rows[1].room_name, "Room 12");
    assert_eq!(rows[1].players, "2 / 4");

    lobby
        .send(LobbyMessage::Service(ServiceEvent::LeftLobby))
        .unwrap();
    lobby
        .send(LobbyMessage::Service(ServiceEvent::JoinedRoom {
            room_name: "Room 12".to_string(),
        }))
        .unwrap();
    drop(lobby);
    handle.await.unwrap();

    let final_view = view.borrow().clone();
    assert_eq!(final_view.status, ConnectionStatus::InRoom);
    assert_eq!(final_view.panel, Panel::InsideRoom);
    assert_eq!(final_view.current_room.as_deref(), Some("Room 12"));
    assert!(final_view.rows.is_empty());
}

#[tokio::test]
async fn test_actor_survives_rejected_intents() {
    let (lobby, mut requests, view, handle) = spawn_actor();

    lobby
        .send(LobbyMessage::Intent(ClientIntent::Login {
            player_name: String::new(),
        }))
        .unwrap();
    lobby
        .send(LobbyMessage::Intent(ClientIntent::ShowRoomList))
        .unwrap();
    lobby
        .send(LobbyMessage::Intent(ClientIntent::Login {
            player_name: "Bob".to_string(),
        }))
        .unwrap();
    drop(lobby);
    handle.await.unwrap();

    assert_eq!(
        requests.recv().await,
        Some(ServiceRequest::Connect {
            nickname: "Bob".to_string()
        })
    );
    assert_eq!(requests.recv().await, None);
    assert_eq!(view.borrow().status, ConnectionStatus::Connecting);
    assert_eq!(view.borrow().panel, Panel::Login);
}

#[tokio::test]
async fn test_json_frames_drive_the_actor() {
    let (lobby, _requests, view, handle) = spawn_actor();

    let lines = [
        r#"{"Service":"ConnectedToMaster"}"#,
        r#"{"Intent":"ShowRoomList"}"#,
        r#"{"Service":"JoinedLobby"}"#,
        r#"{"Service":{"RoomListUpdate":{"rooms":[{"name":"A","is_open":true,"is_visible":true,"removed_from_list":false,"player_count":1,"max_players":4},{"name":"B","is_open":true,"is_visible":true,"removed_from_list":false,"player_count":2,"max_players":4}]}}}"#,
        r#"{"Service":{"RoomListUpdate":{"rooms":[{"name":"A","is_open":true,"is_visible":true,"removed_from_list":true,"player_count":1,"max_players":4}]}}}"#,
    ];
    for line in lines {
        lobby.send(deserialize_frame(line).unwrap().into()).unwrap();
    }
    drop(lobby);
    handle.await.unwrap();

    let view = view.borrow().clone();
    assert_eq!(view.status, ConnectionStatus::InLobby);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].room_name, "B");
}
