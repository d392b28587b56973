use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

use tracing::info;

use crate::bot::state::def::BotResult;

/// Playback collaborator. `sounds` is the membership set commands validate
/// against; `playing` is the busy flag that resolves concurrent play
/// requests first-wins.
pub trait Player: Send + Sync {
    fn playing(&self) -> Option<String>;
    fn play(&self, sound: &str, requested_by: &str);
    fn stop(&self);
    fn sounds(&self) -> HashSet<String>;
}

/// Text-to-speech collaborator, fire-and-forget.
pub trait Tts: Send + Sync {
    fn say(&self, text: &str);
}

/// Player over a directory of sound files. The known-sound set is the
/// lowercased file stems found at scan time; actually decoding audio is
/// someone else's job, so playback here is the busy flag plus a log line.
pub struct FolderPlayer {
    sounds: HashSet<String>,
    now_playing: Mutex<Option<String>>,
}

impl FolderPlayer {
    pub fn scan(dir: &Path) -> BotResult<Self> {
        let mut sounds = HashSet::new();

        for entry in dir.read_dir()? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(stem) = entry.path().file_stem().and_then(|s| s.to_str()) {
                sounds.insert(stem.to_lowercase());
            }
        }

        info!(count = sounds.len(), dir = %dir.display(), "scanned sound folder");
        Ok(Self::with_sounds(sounds))
    }

    pub fn with_sounds(sounds: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            sounds: sounds.into_iter().map(Into::into).collect(),
            now_playing: Mutex::new(None),
        }
    }
}

impl Player for FolderPlayer {
    fn playing(&self) -> Option<String> {
        self.now_playing.lock().expect("player mutex poisoned").clone()
    }

    // TODO: clear the busy flag on end-of-playback once a real audio
    // backend reports it; until then only `stop` releases the speaker.
    fn play(&self, sound: &str, requested_by: &str) {
        info!(sound, requested_by, "playing sound");
        *self.now_playing.lock().expect("player mutex poisoned") = Some(sound.to_owned());
    }

    fn stop(&self) {
        info!("stopping playback");
        *self.now_playing.lock().expect("player mutex poisoned") = None;
    }

    fn sounds(&self) -> HashSet<String> {
        self.sounds.clone()
    }
}

/// Tts that logs the spoken line instead of synthesizing it.
pub struct SpeechLog;

impl Tts for SpeechLog {
    fn say(&self, text: &str) {
        info!(%text, "tts");
    }
}
