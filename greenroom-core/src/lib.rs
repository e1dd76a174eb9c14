pub mod call;
pub mod model;

pub use call::{CallAction, CallEvent, CallRole, CallSession, CallState};
pub use model::{ClientMessage, ConnectionId, InvalidRoomId, RoomId, ServerMessage};
