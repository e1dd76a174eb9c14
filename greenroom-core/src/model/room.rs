use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Room token shared out of band with both interview participants.
///
/// The token doubles as the call's credential: whoever holds it may join,
/// and the relay enforces nothing beyond membership. Rooms are never
/// persisted; the token exists only as a grouping key.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

#[derive(Debug, Error, PartialEq)]
#[error("room token is empty")]
pub struct InvalidRoomId;

impl RoomId {
    /// Accepts any non-blank token. The relay treats the token as opaque;
    /// only an empty credential is rejected.
    pub fn parse(token: impl Into<String>) -> Result<Self, InvalidRoomId> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(InvalidRoomId);
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = InvalidRoomId;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::parse(token)
    }
}

impl From<RoomId> for String {
    fn from(room: RoomId) -> Self {
        room.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
