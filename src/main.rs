use room_lobby_client::config::load_settings;
use room_lobby_client::network::messages::{
    deserialize_frame, serialize_request, ClientIntent, ServiceRequest,
};
use room_lobby_client::{LobbyActor, LobbyMessage, LobbySession};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();

    info!("starting room lobby client");

    let (request_sender, mut request_receiver) = mpsc::unbounded_channel::<ServiceRequest>();
    let (lobby_sender, lobby_receiver) = mpsc::unbounded_channel::<LobbyMessage>();

    let (mut actor, mut view_receiver) =
        LobbyActor::new(LobbySession::new(&settings), request_sender);
    let actor_task = tokio::spawn(async move { actor.run(lobby_receiver).await });

    // Outbound requests go to stdout, one JSON document per line
    let writer_task = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(request) = request_receiver.recv().await {
            match serialize_request(&request) {
                Ok(line) => {
                    if let Err(e) = stdout.write_all(format!("{line}\n").as_bytes()).await {
                        error!(%e, "failed to write service request");
                        break;
                    }
                    let _ = stdout.flush().await;
                }
                Err(e) => error!(%e, "failed to serialize service request"),
            }
        }
    });

    tokio::spawn(async move {
        while view_receiver.changed().await.is_ok() {
            let view = view_receiver.borrow_and_update().clone();
            info!(panel = ?view.panel, room = ?view.current_room, "{}", view.status);
            for row in &view.rows {
                info!(room = %row.room_name, players = %row.players, "room listed");
            }
        }
    });

    if let Some(nickname) = settings.nickname.clone() {
        lobby_sender.send(LobbyMessage::Intent(ClientIntent::Login {
            player_name: nickname,
        }))?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match deserialize_frame(&line) {
            Ok(frame) => lobby_sender.send(frame.into())?,
            Err(e) => warn!(%e, "skipping malformed input line"),
        }
    }

    drop(lobby_sender);
    actor_task.await?;
    writer_task.await?;
    info!("room lobby client stopped");
    Ok(())
}
