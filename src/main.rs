use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use soundbott::bot;
use soundbott::bot::chat_event::chat_event::ChatMessage;
use soundbott::bot::player::player::{FolderPlayer, SpeechLog};
use soundbott::{AppState, BotResult};

#[tokio::main]
async fn main() -> BotResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let channel = env::var("SOUNDBOTT_CHANNEL").unwrap_or_else(|_| "soundbott".into());
    let data_dir = PathBuf::from(env::var("SOUNDBOTT_DATA_DIR").unwrap_or_else(|_| "data".into()));
    let sounds_dir =
        PathBuf::from(env::var("SOUNDBOTT_SOUNDS_DIR").unwrap_or_else(|_| "sounds".into()));

    std::fs::create_dir_all(&sounds_dir)?;
    let player = Arc::new(FolderPlayer::scan(&sounds_dir)?);
    let state = Arc::new(AppState::open(
        &channel,
        &data_dir,
        player,
        Arc::new(SpeechLog),
    )?);

    let (tx, rx) = mpsc::unbounded_channel();

    // Local chat frontend: one "name: message" pair per stdin line. A real
    // transport would feed the same channel.
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let Some((user, text)) = line.split_once(':') else {
                continue;
            };
            let msg = ChatMessage {
                user: user.trim().to_string(),
                text: text.trim().to_string(),
            };
            if tx.send(msg).is_err() {
                break;
            }
        }
    });

    info!(%channel, "soundbott is up");
    bot::run_event_loop(state, rx).await;

    Ok(())
}
