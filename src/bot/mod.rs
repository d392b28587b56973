use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::bot::chat_event::chat_event::ChatMessage;
use crate::bot::commands::commands::command_tree;
use crate::bot::handler::handler::handle_chat;
use crate::bot::state::def::AppState;

pub mod aliases;
pub mod chat_event;
pub mod commands;
pub mod cooldown;
pub mod dispatcher;
pub mod duration;
pub mod handler;
pub mod permissions;
pub mod player;
pub mod prefs;
pub mod state;
pub mod store;

/// Drains the chat channel one message at a time. Dispatch runs to
/// completion before the next message is taken, which is what lets the
/// stores get away without any locking of their own.
pub async fn run_event_loop(state: Arc<AppState>, mut rx: UnboundedReceiver<ChatMessage>) {
    let tree = command_tree();

    while let Some(msg) = rx.recv().await {
        handle_chat(&state, &tree, &msg);
    }
}
