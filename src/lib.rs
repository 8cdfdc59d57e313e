pub mod actors;
pub mod config;
pub mod errors;
pub mod lobby;
pub mod network;


// Re-export commonly used items for convenience
pub use actors::lobby_actor::{LobbyActor, LobbyMessage};
pub use errors::{AppError, AppResult};
pub use lobby::room::RoomInfo;
pub use lobby::room_list_cache::RoomListCache;
pub use lobby::session::LobbySession;
