use crate::registry::RoomRegistry;
use axum::extract::ws::Message;
use dashmap::DashMap;
use greenroom_core::{ClientMessage, ConnectionId, RoomId, ServerMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

struct RelayInner {
    registry: Arc<dyn RoomRegistry>,
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

/// Forwards signaling traffic between the members of a room. Cheap to
/// clone; every WebSocket task holds one.
///
/// The relay is deliberately protocol-blind: SDP and ICE payloads pass
/// through as uninspected blobs, keyed only by room token. Delivery is
/// fire-and-forget with no acknowledgment, retry, or queueing.
#[derive(Clone)]
pub struct RelayService {
    inner: Arc<RelayInner>,
}

impl RelayService {
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self {
            inner: Arc::new(RelayInner {
                registry,
                connections: DashMap::new(),
            }),
        }
    }

    /// Register a freshly upgraded connection and its outbound channel.
    pub fn connect(&self, conn: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(conn, tx);
    }

    /// Drop the connection and its room membership. Disconnect is the only
    /// cancellation primitive: immediate, unconditional, no grace period.
    pub async fn disconnect(&self, conn: &ConnectionId) {
        self.inner.connections.remove(conn);
        match self.inner.registry.leave(conn).await {
            Ok(Some(room)) => debug!("Connection {} left room '{}'", conn, room),
            Ok(None) => {}
            Err(e) => error!("Registry leave failed for {}: {}", conn, e),
        }
    }

    /// Handle one inbound signaling event end to end.
    pub async fn handle(&self, conn: &ConnectionId, msg: ClientMessage) {
        for (target, out) in self.route(conn, msg).await {
            self.send(&target, &out);
        }
    }

    /// Compute the deliveries an inbound event produces. Forwarding is a
    /// function of registry state; the socket writes happen in `handle`, so
    /// the relay's behavior is testable without a live transport.
    pub async fn route(
        &self,
        conn: &ConnectionId,
        msg: ClientMessage,
    ) -> Vec<(ConnectionId, ServerMessage)> {
        match msg {
            ClientMessage::JoinRoom { room_id } => {
                match self.inner.registry.join(conn.clone(), room_id.clone()).await {
                    Ok(Some(previous)) => debug!(
                        "Connection {} joined room '{}', leaving '{}'",
                        conn, room_id, previous
                    ),
                    Ok(None) => debug!("Connection {} joined room '{}'", conn, room_id),
                    Err(e) => error!("Registry join failed for {}: {}", conn, e),
                }
                Vec::new()
            }
            ClientMessage::Offer { room_id, offer } => {
                self.forward(conn, room_id, ServerMessage::Offer(offer)).await
            }
            ClientMessage::Answer { room_id, answer } => {
                self.forward(conn, room_id, ServerMessage::Answer(answer)).await
            }
            ClientMessage::IceCandidate { room_id, candidate } => {
                self.forward(conn, room_id, ServerMessage::IceCandidate(candidate))
                    .await
            }
        }
    }

    async fn forward(
        &self,
        conn: &ConnectionId,
        room: RoomId,
        out: ServerMessage,
    ) -> Vec<(ConnectionId, ServerMessage)> {
        let joined = match self.inner.registry.room_of(conn).await {
            Ok(joined) => joined,
            Err(e) => {
                error!("Registry lookup failed for {}: {}", conn, e);
                return Vec::new();
            }
        };

        if joined.as_ref() != Some(&room) {
            warn!(
                "Connection {} signaled room '{}' without being joined to it, dropping",
                conn, room
            );
            return Vec::new();
        }

        let recipients = match self.inner.registry.recipients(&room, conn).await {
            Ok(recipients) => recipients,
            Err(e) => {
                error!("Registry lookup failed for room '{}': {}", room, e);
                return Vec::new();
            }
        };

        if recipients.is_empty() {
            // Solo room: silent drop, the sender gets no delivery report.
            debug!("No other members in room '{}', dropping signal", room);
            return Vec::new();
        }

        recipients
            .into_iter()
            .map(|target| (target, out.clone()))
            .collect()
    }

    fn send(&self, conn: &ConnectionId, msg: &ServerMessage) {
        if let Some(tx) = self.inner.connections.get(conn) {
            match serde_json::to_string(msg) {
                Ok(json) => {
                    if let Err(e) = tx.send(Message::Text(json.into())) {
                        error!("Failed to queue outbound signal for {}: {}", conn, e);
                    }
                }
                Err(e) => error!("Failed to serialize outbound signal: {}", e),
            }
        } else {
            warn!("Outbound signal for unknown connection {}", conn);
        }
    }
}
