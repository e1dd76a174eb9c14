use crate::registry::{RegistryError, RoomRegistry};
use async_trait::async_trait;
use dashmap::DashMap;
use greenroom_core::{ConnectionId, RoomId};
use std::collections::HashSet;
use tracing::debug;

/// In-process registry. Rooms are created on first join and the entry is
/// dropped the moment its member set empties, so the table tracks only live
/// calls.
#[derive(Default)]
pub struct MemoryRegistry {
    rooms: DashMap<RoomId, HashSet<ConnectionId>>,
    membership: DashMap<ConnectionId, RoomId>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rooms with at least one member.
    pub fn live_rooms(&self) -> usize {
        self.rooms.len()
    }

    fn remove_member(&self, conn: &ConnectionId, room: &RoomId) {
        let emptied = match self.rooms.get_mut(room) {
            Some(mut members) => {
                members.remove(conn);
                members.is_empty()
            }
            None => false,
        };
        if emptied {
            // Re-checked under the entry lock: a concurrent join wins.
            self.rooms.remove_if(room, |_, members| members.is_empty());
            debug!("Room '{}' emptied, dropping entry", room);
        }
    }
}

#[async_trait]
impl RoomRegistry for MemoryRegistry {
    async fn join(
        &self,
        conn: ConnectionId,
        room: RoomId,
    ) -> Result<Option<RoomId>, RegistryError> {
        let previous = self.membership.insert(conn.clone(), room.clone());
        let replaced = previous.filter(|prev| *prev != room);
        if let Some(prev) = &replaced {
            self.remove_member(&conn, prev);
        }
        self.rooms.entry(room).or_default().insert(conn);
        Ok(replaced)
    }

    async fn leave(&self, conn: &ConnectionId) -> Result<Option<RoomId>, RegistryError> {
        let Some((_, room)) = self.membership.remove(conn) else {
            return Ok(None);
        };
        self.remove_member(conn, &room);
        Ok(Some(room))
    }

    async fn room_of(&self, conn: &ConnectionId) -> Result<Option<RoomId>, RegistryError> {
        Ok(self.membership.get(conn).map(|entry| entry.value().clone()))
    }

    async fn recipients(
        &self,
        room: &RoomId,
        sender: &ConnectionId,
    ) -> Result<Vec<ConnectionId>, RegistryError> {
        let Some(members) = self.rooms.get(room) else {
            return Ok(Vec::new());
        };
        Ok(members
            .iter()
            .filter(|member| *member != sender)
            .cloned()
            .collect())
    }
}
