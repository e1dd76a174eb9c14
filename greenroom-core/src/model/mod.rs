mod connection;
mod room;
mod signaling;

pub use connection::ConnectionId;
pub use room::{InvalidRoomId, RoomId};
pub use signaling::{ClientMessage, ServerMessage};
