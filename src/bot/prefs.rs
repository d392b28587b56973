use once_cell::sync::Lazy;

use crate::bot::state::def::PrefsTable;

pub const TTS: &str = "tts";
pub const ANNOUNCE: &str = "announce";

// The full set of toggles the bot knows about. Handlers refuse anything
// outside this table, so stray keys never reach storage.
static DEFAULTS: Lazy<PrefsTable> = Lazy::new(|| {
    let mut table = PrefsTable::new();
    table.insert(TTS.to_string(), true);
    table.insert(ANNOUNCE.to_string(), false);
    table
});

pub fn defaults() -> PrefsTable {
    DEFAULTS.clone()
}

pub fn is_known(key: &str) -> bool {
    DEFAULTS.contains_key(key)
}

/// Current value of a toggle, falling back to its default when the stored
/// table predates the key. Unknown keys read as off.
pub fn enabled(prefs: &PrefsTable, key: &str) -> bool {
    prefs
        .get(key)
        .or_else(|| DEFAULTS.get(key))
        .copied()
        .unwrap_or(false)
}
