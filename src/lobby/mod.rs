pub mod panel;
pub mod room;
pub mod room_list_cache;
pub mod room_list_view;
pub mod session;
