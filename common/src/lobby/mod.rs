mod room_registry;
mod session_registry;

pub use room_registry::RoomRegistry;
pub use session_registry::SessionRegistry;
