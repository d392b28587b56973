use std::collections::HashMap;

use crate::bot::chat_event::chat_event::User;
use crate::bot::permissions::permissions::Role;
use crate::bot::state::def::AppState;

pub mod commands;
pub mod moderation;
pub mod playback;

/// A leaf handler. Arguments stay untyped chat tokens by contract; each
/// handler validates and parses them immediately, nothing deeper does.
pub type HandlerFn = fn(&AppState, &User, &[String]) -> HandlerResult;

pub type HandlerResult = Result<(), Rejection>;

/// A handler bailing out before touching state. The reason never reaches
/// chat; it exists for the dispatch outcome and for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection(pub String);

pub fn reject<T>(reason: impl Into<String>) -> Result<T, Rejection> {
    Err(Rejection(reason.into()))
}

/// A directly invocable command.
pub struct Leaf {
    pub allows: Role,
    pub description: &'static str,
    pub example: &'static str,
    pub handler: HandlerFn,
}

/// One node of the command tree, split explicitly so a node is either
/// routable or invocable, never guessed from shape.
pub enum CommandNode {
    Leaf(Leaf),
    Branch(Branch),
}

/// Routing node. Children are selected by consuming one token; `default`
/// is the leaf that takes over, with the full token sequence as arguments,
/// when the next token matches no child.
#[derive(Default)]
pub struct Branch {
    pub children: HashMap<&'static str, CommandNode>,
    pub default: Option<Leaf>,
}

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(mut self, name: &'static str, leaf: Leaf) -> Self {
        self.children.insert(name, CommandNode::Leaf(leaf));
        self
    }

    pub fn branch(mut self, name: &'static str, branch: Branch) -> Self {
        self.children.insert(name, CommandNode::Branch(branch));
        self
    }

    pub fn default_leaf(mut self, leaf: Leaf) -> Self {
        self.default = Some(leaf);
        self
    }
}

/// What a chat frontend needs to render help for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub path: String,
    pub allows: Role,
    pub description: String,
    pub example: String,
}

/// Flattens the tree into per-leaf specs, examples rendered against the
/// live prefix. Default leaves are skipped: every default is also reachable
/// by name, and the bare-word form is the frontend's story to tell.
pub fn command_surface(tree: &Branch, prefix: &str) -> Vec<CommandSpec> {
    let mut out = Vec::new();
    walk(tree, prefix, "", &mut out);
    out.sort_by(|a, b| a.path.cmp(&b.path));
    out
}

fn walk(branch: &Branch, prefix: &str, path: &str, out: &mut Vec<CommandSpec>) {
    for (name, node) in &branch.children {
        let child_path = if path.is_empty() {
            (*name).to_string()
        } else {
            format!("{path} {name}")
        };

        match node {
            CommandNode::Leaf(leaf) => out.push(CommandSpec {
                path: child_path,
                allows: leaf.allows,
                description: leaf.description.to_string(),
                example: format!("{prefix} {}", leaf.example),
            }),
            CommandNode::Branch(next) => walk(next, prefix, &child_path, out),
        }
    }
}
