pub mod bot;

pub use bot::chat_event::chat_event::{ChatMessage, User};
pub use bot::dispatcher::dispatcher::Dispatch;
pub use bot::permissions::permissions::Role;
pub use bot::state::def::{AppState, BotError, BotResult};
