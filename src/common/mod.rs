pub mod commands;
pub mod events;
pub mod types;

pub use commands::AgentCommand;
pub use events::AgentEvent;
pub use types::{Message, Reference, Role, SocialPost};
