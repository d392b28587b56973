use crate::bot::permissions::permissions::Role;

/// One delivered chat line: who typed it and the raw text. Transport is
/// out of scope, pairs arrive over a channel already split like this.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub user: String,
    pub text: String,
}

/// The sender with their role resolved from the Users store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}
