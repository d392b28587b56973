use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::bot::state::def::{BotError, BotResult};
use crate::bot::store::Store;

/// One JSON document per store, loaded at open and rewritten on every
/// update. A write failure only costs durability, so it degrades to a
/// warning instead of failing the command that triggered it.
pub struct JsonStore<T> {
    path: PathBuf,
    cell: Mutex<T>,
}

impl<T> JsonStore<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    pub fn open(path: impl Into<PathBuf>, default: T) -> BotResult<Self> {
        let path = path.into();

        let value = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => default,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            cell: Mutex::new(value),
        })
    }

    fn persist(&self, value: &T) {
        let written = serde_json::to_string_pretty(value)
            .map_err(BotError::from)
            .and_then(|raw| {
                if let Some(dir) = self.path.parent() {
                    fs::create_dir_all(dir)?;
                }
                fs::write(&self.path, raw).map_err(BotError::from)
            });

        if let Err(e) = written {
            warn!(path = %self.path.display(), "failed to persist store: {e}");
        }
    }
}

impl<T> Store<T> for JsonStore<T>
where
    T: Clone + Serialize + DeserializeOwned + Send,
{
    fn get(&self) -> T {
        self.cell.lock().expect("store mutex poisoned").clone()
    }

    fn update(&self, apply: &mut dyn FnMut(T) -> T) {
        let mut cell = self.cell.lock().expect("store mutex poisoned");
        let next = apply(cell.clone());
        self.persist(&next);
        *cell = next;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn missing_file_starts_from_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonStore<String> =
            JsonStore::open(dir.path().join("prefix.json"), "!xd".to_string()).unwrap();

        assert_eq!(store.get(), "!xd");
    }

    #[test]
    fn updates_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");

        let store: JsonStore<HashMap<String, String>> =
            JsonStore::open(&path, HashMap::new()).unwrap();
        store.update(&mut |mut table| {
            table.insert("explode".to_string(), "boom".to_string());
            table
        });

        let reopened: JsonStore<HashMap<String, String>> =
            JsonStore::open(&path, HashMap::new()).unwrap();
        assert_eq!(reopened.get().get("explode"), Some(&"boom".to_string()));
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_silent_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "not json").unwrap();

        let opened: BotResult<JsonStore<HashMap<String, String>>> =
            JsonStore::open(&path, HashMap::new());
        assert!(opened.is_err());
    }
}
