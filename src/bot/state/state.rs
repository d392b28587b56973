use std::path::Path;
use std::sync::Arc;

use crate::bot::permissions::permissions::Role;
use crate::bot::player::player::{Player, Tts};
use crate::bot::prefs;
use crate::bot::state::def::{
    default_prefix, AliasTable, AppState, BotResult, CooldownTable, UsersTable,
};
use crate::bot::store::json::JsonStore;
use crate::bot::store::memory::MemStore;

impl AppState {
    /// Opens the five stores under `data_dir/<channel>/`. Defaults apply
    /// only when a store file does not exist yet; in particular the channel
    /// owner is seeded as Streamer on first run and never re-seeded.
    pub fn open(
        channel: &str,
        data_dir: &Path,
        player: Arc<dyn Player>,
        tts: Arc<dyn Tts>,
    ) -> BotResult<Self> {
        let dir = data_dir.join(channel.to_lowercase());

        Ok(Self {
            channel: channel.to_lowercase(),
            users: Arc::new(JsonStore::open(dir.join("users.json"), seed_users(channel))?),
            prefs: Arc::new(JsonStore::open(dir.join("prefs.json"), prefs::defaults())?),
            aliases: Arc::new(JsonStore::open(dir.join("aliases.json"), AliasTable::new())?),
            cooldowns: Arc::new(JsonStore::open(dir.join("cooldowns.json"), CooldownTable::new())?),
            prefix: Arc::new(JsonStore::open(dir.join("prefix.json"), default_prefix())?),
            player,
            tts,
        })
    }

    /// Same wiring without any disk behind it.
    pub fn in_memory(channel: &str, player: Arc<dyn Player>, tts: Arc<dyn Tts>) -> Self {
        Self {
            channel: channel.to_lowercase(),
            users: Arc::new(MemStore::new(seed_users(channel))),
            prefs: Arc::new(MemStore::new(prefs::defaults())),
            aliases: Arc::new(MemStore::new(AliasTable::new())),
            cooldowns: Arc::new(MemStore::new(CooldownTable::new())),
            prefix: Arc::new(MemStore::new(default_prefix())),
            player,
            tts,
        }
    }
}

fn seed_users(channel: &str) -> UsersTable {
    let mut users = UsersTable::new();
    users.insert(channel.to_lowercase(), Role::Streamer);
    users
}
