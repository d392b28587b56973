use crate::bot::chat_event::chat_event::User;
use crate::bot::commands::{Branch, CommandNode, Leaf, Rejection};
use crate::bot::permissions::permissions::allows;
use crate::bot::state::def::AppState;
use crate::bot::store::Store;

/// How one dispatch ended. Everything except `Invoked` is externally
/// silent; the variants exist so tests and the event loop can see why
/// nothing happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Invoked,
    RoutingMiss,
    PermissionDenied,
    Rejected(String),
}

/// Entry point for one delivered chat line. `None` means the message was
/// not addressed to the bot at all. The prefix is read from its store on
/// every call; `prefix` commands take effect for the very next message.
pub fn handle_message(state: &AppState, tree: &Branch, user: &User, raw: &str) -> Option<Dispatch> {
    let prefix = state.prefix.get();
    let rest = raw.strip_prefix(&prefix)?;

    let tokens: Vec<String> = rest.split_whitespace().map(str::to_owned).collect();
    Some(dispatch(tree, state, user, &tokens))
}

/// Walks the token sequence down the tree. A matching child consumes one
/// token; a miss falls back to the branch default with the entire
/// remaining sequence as arguments, so the unmatched word becomes arg 0.
pub fn dispatch(branch: &Branch, state: &AppState, user: &User, tokens: &[String]) -> Dispatch {
    match tokens.first().and_then(|t| branch.children.get(t.as_str())) {
        None => match &branch.default {
            Some(leaf) => invoke(leaf, state, user, tokens),
            None => Dispatch::RoutingMiss,
        },
        Some(CommandNode::Branch(next)) => dispatch(next, state, user, &tokens[1..]),
        Some(CommandNode::Leaf(leaf)) => invoke(leaf, state, user, &tokens[1..]),
    }
}

fn invoke(leaf: &Leaf, state: &AppState, user: &User, args: &[String]) -> Dispatch {
    if !allows(user.role, leaf.allows) {
        return Dispatch::PermissionDenied;
    }

    match (leaf.handler)(state, user, args) {
        Ok(()) => Dispatch::Invoked,
        Err(Rejection(reason)) => Dispatch::Rejected(reason),
    }
}
