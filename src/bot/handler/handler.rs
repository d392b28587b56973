use tracing::info;

use crate::bot::chat_event::chat_event::{ChatMessage, User};
use crate::bot::commands::Branch;
use crate::bot::dispatcher::dispatcher::{handle_message, Dispatch};
use crate::bot::permissions::permissions::Role;
use crate::bot::state::def::AppState;
use crate::bot::store::Store;

/// Runs one chat message through role lookup and dispatch. Only a
/// successful invocation leaves a log line; misses, denials and rejections
/// stay silent.
pub fn handle_chat(state: &AppState, tree: &Branch, msg: &ChatMessage) -> Option<Dispatch> {
    let role = state
        .users
        .get()
        .get(&msg.user.to_lowercase())
        .copied()
        .unwrap_or(Role::User);
    let user = User::new(msg.user.clone(), role);

    let outcome = handle_message(state, tree, &user, &msg.text);
    if outcome == Some(Dispatch::Invoked) {
        info!(user = %user.name, text = %msg.text, "command invoked");
    }

    outcome
}
