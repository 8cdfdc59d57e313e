use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Serialize, PartialEq)]
pub enum AppError {
    // Validation errors
    #[error("Invalid player name: {reason}")]
    InvalidPlayerName { reason: String },

    #[error("Invalid room name: {reason}")]
    InvalidRoomName { reason: String },

    #[error("Invalid max players '{input}': {reason}")]
    InvalidMaxPlayers { input: String, reason: String },

    // Session errors
    #[error("Cannot {action} while not connected to the master server")]
    NotConnected { action: String },

    #[error("Already connected as '{nickname}'")]
    AlreadyConnected { nickname: String },

    // Plumbing errors
    #[error("Failed to serialize message: {message}")]
    SerializationError { message: String },

    #[error("Channel '{channel}' is closed")]
    ChannelClosed { channel: String },

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCategory {
    ClientError,
    ServerError,
    ValidationError,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::NotConnected { .. } | AppError::AlreadyConnected { .. } => {
                ErrorCategory::ClientError
            }

            AppError::InvalidPlayerName { .. }
            | AppError::InvalidRoomName { .. }
            | AppError::InvalidMaxPlayers { .. } => ErrorCategory::ValidationError,

            AppError::SerializationError { .. }
            | AppError::ChannelClosed { .. }
            | AppError::Config { .. } => ErrorCategory::ServerError,
        }
    }

    pub fn should_log(&self) -> bool {
        matches!(self.category(), ErrorCategory::ServerError)
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            AppError::InvalidPlayerName { .. } => "InvalidPlayerName",
            AppError::InvalidRoomName { .. } => "InvalidRoomName",
            AppError::InvalidMaxPlayers { .. } => "InvalidMaxPlayers",
            AppError::NotConnected { .. } => "NotConnected",
            AppError::AlreadyConnected { .. } => "AlreadyConnected",
            AppError::SerializationError { .. } => "SerializationError",
            AppError::ChannelClosed { .. } => "ChannelClosed",
            AppError::Config { .. } => "Config",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::InvalidPlayerName { .. } => "Player name is invalid!".to_string(),
            AppError::NotConnected { .. } => "You need to connect first".to_string(),
            AppError::InvalidMaxPlayers { .. } => {
                "Max players must be a number between 1 and 255".to_string()
            }
            AppError::SerializationError { .. } => "Invalid message format".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError {
            message: err.to_string(),
        }
    }
}

pub mod validation {
    use super::AppError;

    pub const MAX_PLAYER_NAME_LEN: usize = 50;
    pub const MAX_ROOM_NAME_LEN: usize = 100;

    pub fn validate_player_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::InvalidPlayerName {
                reason: "Player name cannot be empty".to_string(),
            });
        }
        if name.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(AppError::InvalidPlayerName {
                reason: format!("Player name cannot exceed {MAX_PLAYER_NAME_LEN} characters"),
            });
        }
        Ok(())
    }

    pub fn validate_room_name(name: &str) -> Result<(), AppError> {
        if name.chars().count() > MAX_ROOM_NAME_LEN {
            return Err(AppError::InvalidRoomName {
                reason: format!("Room name cannot exceed {MAX_ROOM_NAME_LEN} characters"),
            });
        }
        Ok(())
    }

    /// Parses the max-players text field. Blank input falls back to `default`.
    pub fn parse_max_players(input: &str, default: u8) -> Result<u8, AppError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        let value: i64 = trimmed
            .parse()
            .map_err(|_| AppError::InvalidMaxPlayers {
                input: input.to_string(),
                reason: "not a whole number".to_string(),
            })?;
        if !(1..=u8::MAX as i64).contains(&value) {
            return Err(AppError::InvalidMaxPlayers {
                input: input.to_string(),
                reason: "must be between 1 and 255".to_string(),
            });
        }
        Ok(value as u8)
    }
}
