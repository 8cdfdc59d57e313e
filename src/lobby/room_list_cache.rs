use std::collections::HashMap;
use tracing::trace;

use crate::lobby::room::RoomInfo;

/// Listable rooms known to this lobby session, keyed by room name.
///
/// Update batches from the service are incremental, not full snapshots, so each
/// batch is folded into the existing entries. Only listable rooms are ever
/// stored, which keeps `snapshot` a plain read.
#[derive(Debug, Default, Clone)]
pub struct RoomListCache {
    rooms: HashMap<String, RoomInfo>, // room_name -> last listable report
}

impl RoomListCache {
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    pub fn apply_update_batch<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = RoomInfo>,
    {
        for room in updates {
            if room.is_listable() {
                trace!(room = %room.name, players = %room.players_label(), "room listed");
                self.rooms.insert(room.name.clone(), room);
            } else if self.rooms.remove(&room.name).is_some() {
                trace!(room = %room.name, "room delisted");
            }
        }
    }

    pub fn snapshot(&self) -> Vec<RoomInfo> {
        self.rooms.values().cloned().collect()
    }

    pub fn get(&self, room_name: &str) -> Option<&RoomInfo> {
        self.rooms.get(room_name)
    }

    pub fn contains(&self, room_name: &str) -> bool {
        self.rooms.contains_key(room_name)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
