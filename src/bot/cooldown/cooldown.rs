use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::bot::state::def::CooldownTable;

/// Which half of a sound's cooldown record an operation touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CooldownField {
    PerUser,
    PerSound,
}

/// Dual cooldown window for one sound, stored as milliseconds on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Cooldown {
    #[serde(with = "serde_millis")]
    pub per_user: Duration,
    #[serde(with = "serde_millis")]
    pub per_sound: Duration,
}

impl Cooldown {
    fn field_mut(&mut self, field: CooldownField) -> &mut Duration {
        match field {
            CooldownField::PerUser => &mut self.per_user,
            CooldownField::PerSound => &mut self.per_sound,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.per_user.is_zero() && self.per_sound.is_zero()
    }
}

/// Sets one field of a sound's record, keeping the other field from the
/// existing record (zero when the sound had none). The table is sparse:
/// a record whose fields are both zero is dropped instead of stored.
pub fn set(mut table: CooldownTable, sound: &str, field: CooldownField, window: Duration) -> CooldownTable {
    let mut record = table.get(sound).copied().unwrap_or_default();
    *record.field_mut(field) = window;

    if record.is_empty() {
        table.remove(sound);
    } else {
        table.insert(sound.to_owned(), record);
    }

    table
}

/// Zeroes one field, deleting the record entirely once both fields are
/// zero. A sound with no record is left alone.
pub fn clear(table: CooldownTable, sound: &str, field: CooldownField) -> CooldownTable {
    if !table.contains_key(sound) {
        return table;
    }
    set(table, sound, field, Duration::ZERO)
}
