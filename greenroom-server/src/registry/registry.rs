use async_trait::async_trait;
use greenroom_core::{ConnectionId, RoomId};
use thiserror::Error;

/// Failures surfaced by a registry backend. The in-memory registry never
/// produces one; an implementation backed by a shared store reports its I/O
/// problems here.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry backend unavailable: {0}")]
    Backend(String),
}

/// Mapping from room token to the set of joined connections.
///
/// Injected into the relay at construction, so the in-memory implementation
/// can be swapped for one backed by a shared store if the relay ever runs as
/// more than one process.
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// Add `conn` to `room`. A connection belongs to at most one room:
    /// joining again replaces the previous membership, and the vacated room
    /// is returned when it differs from `room`.
    async fn join(
        &self,
        conn: ConnectionId,
        room: RoomId,
    ) -> Result<Option<RoomId>, RegistryError>;

    /// Remove the connection from its room, if any. Not an error when the
    /// connection was never a member.
    async fn leave(&self, conn: &ConnectionId) -> Result<Option<RoomId>, RegistryError>;

    /// The room the connection is currently joined to.
    async fn room_of(&self, conn: &ConnectionId) -> Result<Option<RoomId>, RegistryError>;

    /// Members of `room` other than `sender`. Empty when the room does not
    /// exist or has no other members.
    async fn recipients(
        &self,
        room: &RoomId,
        sender: &ConnectionId,
    ) -> Result<Vec<ConnectionId>, RegistryError>;
}
