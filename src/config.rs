use std::fs;

use serde::Deserialize;

use crate::{AppError, AppResult};

pub const SETTINGS_FILE: &str = "lobby.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Logs in automatically at startup when set.
    pub nickname: Option<String>,
    pub default_max_players: u8,
    pub room_name_prefix: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nickname: None,
            default_max_players: 4,
            room_name_prefix: "Room".into(),
            log_filter: "info".into(),
        }
    }
}

pub fn parse_settings(raw: &str) -> AppResult<Settings> {
    let settings: Settings = toml::from_str(raw).map_err(|e| AppError::Config {
        message: e.to_string(),
    })?;
    if settings.default_max_players == 0 {
        return Err(AppError::Config {
            message: "default_max_players must be at least 1".to_string(),
        });
    }
    Ok(settings)
}

/// Reads `lobby.toml` when present, then applies `LOBBY_*` environment overrides.
pub fn load_settings() -> AppResult<Settings> {
    let mut settings = match fs::read_to_string(SETTINGS_FILE) {
        Ok(raw) => parse_settings(&raw)?,
        Err(_) => Settings::default(),
    };
    apply_overrides(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

pub fn apply_overrides<F>(settings: &mut Settings, lookup: F) -> AppResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("LOBBY_NICKNAME") {
        settings.nickname = Some(v);
    }
    if let Some(v) = lookup("LOBBY_DEFAULT_MAX_PLAYERS") {
        settings.default_max_players = match v.parse::<u8>() {
            Ok(parsed) if parsed > 0 => parsed,
            _ => {
                return Err(AppError::Config {
                    message: format!("LOBBY_DEFAULT_MAX_PLAYERS '{v}' is not in 1..=255"),
                })
            }
        };
    }
    if let Some(v) = lookup("LOBBY_ROOM_PREFIX") {
        settings.room_name_prefix = v;
    }
    if let Some(v) = lookup("LOBBY_LOG") {
        settings.log_filter = v;
    }
    Ok(())
}
