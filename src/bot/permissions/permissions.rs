use core::fmt;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Role hierarchy for soundboard access. Derived `Ord` gives
/// `None < User < Editor < Streamer`, so checks are plain `>=`.
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Role {
    None,
    User,
    Editor,
    Streamer,
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::None => "none",
            Role::User => "user",
            Role::Editor => "editor",
            Role::Streamer => "streamer",
        };
        write!(f, "{}", s)
    }
}

pub fn allows(user: Role, required: Role) -> bool {
    user >= required
}

/// Looks a role up by its chat spelling. Case is normalized first
/// (capital first letter, rest lowered). Anything that parses as an
/// integer is rejected so the symbolic names never collide with the
/// underlying discriminants.
pub fn role_by_name(name: &str) -> Option<Role> {
    if name.parse::<i64>().is_ok() {
        return None;
    }

    let mut chars = name.chars();
    let first = chars.next()?;
    let normalized: String = first
        .to_uppercase()
        .chain(chars.flat_map(|c| c.to_lowercase()))
        .collect();

    match normalized.as_str() {
        "None" => Some(Role::None),
        "User" => Some(Role::User),
        "Editor" => Some(Role::Editor),
        "Streamer" => Some(Role::Streamer),
        _ => None,
    }
}
