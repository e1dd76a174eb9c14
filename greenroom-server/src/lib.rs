pub mod app;
pub mod config;
pub mod registry;
pub mod relay;
pub mod ws;

pub use app::app;
pub use config::ServerConfig;
pub use registry::{MemoryRegistry, RegistryError, RoomRegistry};
pub use relay::RelayService;
pub use ws::ws_handler;
