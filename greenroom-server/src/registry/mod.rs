mod memory;
mod registry;

pub use memory::MemoryRegistry;
pub use registry::{RegistryError, RoomRegistry};
