use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

use crate::lobby::room_list_view::LobbyView;
use crate::lobby::session::LobbySession;
use crate::network::messages::{ClientIntent, InboundFrame, ServiceEvent, ServiceRequest};
use crate::{AppError, AppResult};

#[derive(Debug)]
pub enum LobbyMessage {
    Service(ServiceEvent),
    Intent(ClientIntent),
}

impl From<InboundFrame> for LobbyMessage {
    fn from(frame: InboundFrame) -> Self {
        match frame {
            InboundFrame::Service(event) => LobbyMessage::Service(event),
            InboundFrame::Intent(intent) => LobbyMessage::Intent(intent),
        }
    }
}

/// Drives a [`LobbySession`] from a single task.
///
/// Service notifications and UI intents are serialized through one channel, so
/// room list batches are applied one at a time and never race a reader. The
/// renderer only ever sees the published [`LobbyView`].
pub struct LobbyActor {
    session: LobbySession,
    request_sender: mpsc::UnboundedSender<ServiceRequest>,
    view_sender: watch::Sender<LobbyView>,
}

impl LobbyActor {
    pub fn new(
        session: LobbySession,
        request_sender: mpsc::UnboundedSender<ServiceRequest>,
    ) -> (Self, watch::Receiver<LobbyView>) {
        let (view_sender, view_receiver) = watch::channel(session.view());
        (
            Self {
                session,
                request_sender,
                view_sender,
            },
            view_receiver,
        )
    }

    pub async fn run(&mut self, mut receiver: mpsc::UnboundedReceiver<LobbyMessage>) {
        info!(session = %self.session.get_id(), "lobby actor started");

        while let Some(message) = receiver.recv().await {
            if let Err(error) = self.handle_message(message) {
                if error.should_log() {
                    error!(kind = error.variant_name(), %error, "lobby actor error");
                } else {
                    warn!(kind = error.variant_name(), "{}", error.user_friendly_message());
                }
            }
            self.publish_view();
        }

        info!(session = %self.session.get_id(), "lobby actor stopped");
    }

    pub fn handle_message(&mut self, message: LobbyMessage) -> AppResult<()> {
        match message {
            LobbyMessage::Service(event) => {
                self.session.handle_event(event);
            }
            LobbyMessage::Intent(intent) => {
                debug!(?intent, "handling client intent");
                for request in self.session.handle_intent(intent)? {
                    self.request_sender.send(request)?;
                }
            }
        }
        Ok(())
    }

    pub fn session(&self) -> &LobbySession {
        &self.session
    }

    fn publish_view(&self) {
        let view = self.session.view();
        self.view_sender.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
    }
}

impl From<mpsc::error::SendError<ServiceRequest>> for AppError {
    fn from(_: mpsc::error::SendError<ServiceRequest>) -> Self {
        AppError::ChannelClosed {
            channel: "service requests".to_string(),
        }
    }
}
