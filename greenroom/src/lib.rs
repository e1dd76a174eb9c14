pub use greenroom_core::model::{ConnectionId, RoomId};

pub mod model {
    pub use greenroom_core::model::*;
}

pub mod call {
    pub use greenroom_core::call::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use greenroom_server::*;
}
