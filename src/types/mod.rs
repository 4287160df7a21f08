pub mod events;
pub mod message;

pub use events::StreamEvent;
pub use message::{Message, Role};
