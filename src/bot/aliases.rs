use crate::bot::state::def::AliasTable;

/// Resolves a chat-supplied sound name to its canonical name.
///
/// Lookup is by lowercased name; a miss returns the lowercased input
/// unchanged. Resolution is a single hop: alias targets are stored already
/// canonical, so there is nothing to chase.
pub fn resolve(aliases: &AliasTable, name: &str) -> String {
    let name = name.to_lowercase();
    match aliases.get(&name) {
        Some(canonical) => canonical.clone(),
        None => name,
    }
}
