use std::{collections::HashMap, io, sync::Arc};

use thiserror::Error;

use crate::bot::cooldown::cooldown::Cooldown;
use crate::bot::permissions::permissions::Role;
use crate::bot::player::player::{Player, Tts};
use crate::bot::store::Store;

pub type BotResult<T> = Result<T, BotError>;

/// Snapshot types held by the stores. Keys are lowercase throughout.
pub type UsersTable = HashMap<String, Role>;
pub type AliasTable = HashMap<String, String>;
pub type CooldownTable = HashMap<String, Cooldown>;
pub type PrefsTable = HashMap<String, bool>;

/// Everything a command handler may touch, threaded explicitly instead of
/// living in globals. Stores own the persistent state; the engine only
/// reads snapshots and submits read-modify-write updates.
pub struct AppState {
    pub channel: String,
    pub users: Arc<dyn Store<UsersTable>>,
    pub prefs: Arc<dyn Store<PrefsTable>>,
    pub aliases: Arc<dyn Store<AliasTable>>,
    pub cooldowns: Arc<dyn Store<CooldownTable>>,
    pub prefix: Arc<dyn Store<String>>,
    pub player: Arc<dyn Player>,
    pub tts: Arc<dyn Tts>,
}

pub fn default_prefix() -> String {
    "!xd".into()
}

#[derive(Debug, Error)]
pub enum BotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Custom(String),
}
