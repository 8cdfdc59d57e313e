pub mod lobby_actor;
