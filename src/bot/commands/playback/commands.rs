use crate::bot::aliases;
use crate::bot::chat_event::chat_event::User;
use crate::bot::commands::{reject, HandlerResult, Leaf};
use crate::bot::permissions::permissions::Role;
use crate::bot::player::player::{Player, Tts};
use crate::bot::prefs;
use crate::bot::state::def::AppState;
use crate::bot::store::Store;

pub fn play_command() -> Leaf {
    Leaf {
        allows: Role::User,
        description: "Play a sound by name",
        example: "play boom",
        handler: play,
    }
}

pub fn stop_command() -> Leaf {
    Leaf {
        allows: Role::User,
        description: "Stop whatever sound is playing",
        example: "stop",
        handler: stop,
    }
}

pub fn say_command() -> Leaf {
    Leaf {
        allows: Role::Editor,
        description: "Speak a line over text-to-speech",
        example: "say hello chat",
        handler: say,
    }
}

fn play(state: &AppState, user: &User, args: &[String]) -> HandlerResult {
    let Some(name) = args.first() else {
        return reject("no sound named");
    };

    let sound = aliases::resolve(&state.aliases.get(), name);
    if !state.player.sounds().contains(&sound) {
        return reject(format!("unknown sound '{sound}'"));
    }

    // Busy flag, not a queue: whoever got here first keeps the speaker.
    if state.player.playing().is_some() {
        return reject("something is already playing");
    }

    state.player.play(&sound, &user.name);

    if prefs::enabled(&state.prefs.get(), prefs::ANNOUNCE) {
        state.tts.say(&format!("{} played {}", user.name, sound));
    }

    Ok(())
}

fn stop(state: &AppState, _user: &User, _args: &[String]) -> HandlerResult {
    if state.player.playing().is_none() {
        return reject("nothing is playing");
    }

    state.player.stop();
    Ok(())
}

fn say(state: &AppState, _user: &User, args: &[String]) -> HandlerResult {
    if !prefs::enabled(&state.prefs.get(), prefs::TTS) {
        return reject("tts is turned off");
    }
    if args.is_empty() {
        return reject("nothing to say");
    }

    state.tts.say(&args.join(" "));
    Ok(())
}
