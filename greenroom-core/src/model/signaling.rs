use crate::model::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Signaling events sent by a client. SDP and ICE payloads are opaque blobs
/// defined by the WebRTC standard; the relay forwards them uninspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientMessage {
    JoinRoom {
        #[serde(rename = "roomId")]
        room_id: RoomId,
    },
    Offer {
        #[serde(rename = "roomId")]
        room_id: RoomId,
        offer: Value,
    },
    Answer {
        #[serde(rename = "roomId")]
        room_id: RoomId,
        answer: Value,
    },
    IceCandidate {
        #[serde(rename = "roomId")]
        room_id: RoomId,
        candidate: Value,
    },
}

/// Signaling events forwarded to the other members of a room. The relay
/// re-emits only the payload; the recipient already knows its room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerMessage {
    Offer(Value),
    Answer(Value),
    IceCandidate(Value),
}
