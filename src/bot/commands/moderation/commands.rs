use crate::bot::aliases;
use crate::bot::chat_event::chat_event::User;
use crate::bot::commands::{reject, HandlerResult, Leaf};
use crate::bot::cooldown::cooldown::{self, CooldownField};
use crate::bot::duration;
use crate::bot::permissions::permissions::{role_by_name, Role};
use crate::bot::player::player::Player;
use crate::bot::prefs;
use crate::bot::state::def::AppState;
use crate::bot::store::Store;

pub fn role_command() -> Leaf {
    Leaf {
        allows: Role::Streamer,
        description: "Assign a role to a user",
        example: "role somebody editor",
        handler: set_role,
    }
}

pub fn prefs_command() -> Leaf {
    Leaf {
        allows: Role::Editor,
        description: "Flip a named toggle on or off",
        example: "prefs tts off",
        handler: set_pref,
    }
}

pub fn alias_set_command() -> Leaf {
    Leaf {
        allows: Role::Editor,
        description: "Point an alias at a sound",
        example: "alias set explode boom",
        handler: alias_set,
    }
}

pub fn alias_rm_command() -> Leaf {
    Leaf {
        allows: Role::Editor,
        description: "Drop an alias",
        example: "alias rm explode",
        handler: alias_rm,
    }
}

pub fn prefix_command() -> Leaf {
    Leaf {
        allows: Role::Editor,
        description: "Change the command prefix",
        example: "prefix !sb",
        handler: set_prefix,
    }
}

pub fn cooldown_set_user_command() -> Leaf {
    Leaf {
        allows: Role::Editor,
        description: "Set the per-user cooldown for a sound",
        example: "cooldown set user boom 1m 30s",
        handler: |state, _user, args| cooldown_set(state, CooldownField::PerUser, args),
    }
}

pub fn cooldown_set_sound_command() -> Leaf {
    Leaf {
        allows: Role::Editor,
        description: "Set the shared cooldown for a sound",
        example: "cooldown set sound boom 30s",
        handler: |state, _user, args| cooldown_set(state, CooldownField::PerSound, args),
    }
}

pub fn cooldown_rm_user_command() -> Leaf {
    Leaf {
        allows: Role::Editor,
        description: "Clear the per-user cooldown for a sound",
        example: "cooldown rm user boom",
        handler: |state, _user, args| cooldown_clear(state, CooldownField::PerUser, args),
    }
}

pub fn cooldown_rm_sound_command() -> Leaf {
    Leaf {
        allows: Role::Editor,
        description: "Clear the shared cooldown for a sound",
        example: "cooldown rm sound boom",
        handler: |state, _user, args| cooldown_clear(state, CooldownField::PerSound, args),
    }
}

fn set_role(state: &AppState, _user: &User, args: &[String]) -> HandlerResult {
    let [name, role_name] = args else {
        return reject("expected: role <name> <role>");
    };

    let Some(role) = role_by_name(role_name) else {
        return reject(format!("unknown role '{role_name}'"));
    };

    let key = name.trim_start_matches('@').to_lowercase();
    state.users.update(&mut |mut users| {
        users.insert(key.clone(), role);
        users
    });

    Ok(())
}

fn set_pref(state: &AppState, _user: &User, args: &[String]) -> HandlerResult {
    let [key, value] = args else {
        return reject("expected: prefs <key> <on|off>");
    };

    let key = key.to_lowercase();
    if !prefs::is_known(&key) {
        return reject(format!("unknown preference '{key}'"));
    }

    let enabled = match value.to_lowercase().as_str() {
        "on" => true,
        "off" => false,
        other => return reject(format!("unrecognized value '{other}'")),
    };

    state.prefs.update(&mut |mut table| {
        table.insert(key.clone(), enabled);
        table
    });

    Ok(())
}

fn alias_set(state: &AppState, _user: &User, args: &[String]) -> HandlerResult {
    let [alias, target] = args else {
        return reject("expected: alias set <alias> <sound>");
    };

    let alias = alias.to_lowercase();
    // resolve the target first so stored targets are always canonical and
    // lookups stay one hop
    let target = aliases::resolve(&state.aliases.get(), target);
    if !state.player.sounds().contains(&target) {
        return reject(format!("unknown sound '{target}'"));
    }

    state.aliases.update(&mut |mut table| {
        table.insert(alias.clone(), target.clone());
        table
    });

    Ok(())
}

fn alias_rm(state: &AppState, _user: &User, args: &[String]) -> HandlerResult {
    let [alias] = args else {
        return reject("expected: alias rm <alias>");
    };

    let alias = alias.to_lowercase();
    if !state.aliases.get().contains_key(&alias) {
        return reject(format!("no alias '{alias}'"));
    }

    state.aliases.update(&mut |mut table| {
        table.remove(&alias);
        table
    });

    Ok(())
}

fn set_prefix(state: &AppState, _user: &User, args: &[String]) -> HandlerResult {
    let [next] = args else {
        return reject("expected: prefix <new>");
    };

    let next = next.clone();
    state.prefix.update(&mut |_| next.clone());

    Ok(())
}

fn cooldown_set(state: &AppState, field: CooldownField, args: &[String]) -> HandlerResult {
    let Some((name, rest)) = args.split_first() else {
        return reject("expected: cooldown set <sound> <duration>");
    };
    if rest.is_empty() {
        return reject("no duration given");
    }

    let sound = aliases::resolve(&state.aliases.get(), name);
    if !state.player.sounds().contains(&sound) {
        return reject(format!("unknown sound '{sound}'"));
    }

    let window = duration::parse(&rest.join(" "));
    state
        .cooldowns
        .update(&mut |table| cooldown::set(table, &sound, field, window));

    Ok(())
}

fn cooldown_clear(state: &AppState, field: CooldownField, args: &[String]) -> HandlerResult {
    let [name] = args else {
        return reject("expected: cooldown rm <sound>");
    };

    let sound = aliases::resolve(&state.aliases.get(), name);
    if !state.player.sounds().contains(&sound) {
        return reject(format!("unknown sound '{sound}'"));
    }
    if !state.cooldowns.get().contains_key(&sound) {
        return reject(format!("no cooldown recorded for '{sound}'"));
    }

    state
        .cooldowns
        .update(&mut |table| cooldown::clear(table, &sound, field));

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::bot::player::player::{FolderPlayer, SpeechLog};
    use crate::bot::store::Store;

    fn state() -> AppState {
        AppState::in_memory(
            "streamer",
            Arc::new(FolderPlayer::with_sounds(["boom", "airhorn"])),
            Arc::new(SpeechLog),
        )
    }

    fn streamer() -> User {
        User::new("streamer", Role::Streamer)
    }

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn role_upserts_by_lowercase_name() {
        let state = state();

        set_role(&state, &streamer(), &args(&["@SomeBody", "editor"])).unwrap();
        assert_eq!(state.users.get().get("somebody"), Some(&Role::Editor));
    }

    #[test]
    fn role_rejects_garbage_without_touching_users() {
        let state = state();
        let before = state.users.get();

        assert!(set_role(&state, &streamer(), &args(&["somebody", "3"])).is_err());
        assert!(set_role(&state, &streamer(), &args(&["somebody"])).is_err());
        assert_eq!(state.users.get(), before);
    }

    #[test]
    fn prefs_rejects_unknown_keys_and_values() {
        let state = state();

        assert!(set_pref(&state, &streamer(), &args(&["confetti", "on"])).is_err());
        assert!(set_pref(&state, &streamer(), &args(&["tts", "maybe"])).is_err());
        assert!(!state.prefs.get().contains_key("confetti"));

        set_pref(&state, &streamer(), &args(&["TTS", "off"])).unwrap();
        assert_eq!(state.prefs.get().get("tts"), Some(&false));
    }

    #[test]
    fn alias_set_stores_canonical_targets_only() {
        let state = state();

        alias_set(&state, &streamer(), &args(&["explode", "Boom"])).unwrap();
        // aliasing through an existing alias lands on the same canonical name
        alias_set(&state, &streamer(), &args(&["kaboom", "explode"])).unwrap();

        let table = state.aliases.get();
        assert_eq!(table.get("explode"), Some(&"boom".to_string()));
        assert_eq!(table.get("kaboom"), Some(&"boom".to_string()));
    }

    #[test]
    fn alias_set_requires_a_known_sound() {
        let state = state();
        assert!(alias_set(&state, &streamer(), &args(&["explode", "vuvuzela"])).is_err());
        assert!(state.aliases.get().is_empty());
    }

    #[test]
    fn alias_rm_only_removes_what_exists() {
        let state = state();
        alias_set(&state, &streamer(), &args(&["explode", "boom"])).unwrap();

        assert!(alias_rm(&state, &streamer(), &args(&["kaboom"])).is_err());
        alias_rm(&state, &streamer(), &args(&["explode"])).unwrap();
        assert!(state.aliases.get().is_empty());
    }

    #[test]
    fn prefix_swaps_the_stored_value() {
        let state = state();
        set_prefix(&state, &streamer(), &args(&["!sb"])).unwrap();
        assert_eq!(state.prefix.get(), "!sb");
    }

    #[test]
    fn cooldown_set_goes_through_alias_resolution() {
        let state = state();
        alias_set(&state, &streamer(), &args(&["explode", "boom"])).unwrap();

        cooldown_set(&state, CooldownField::PerUser, &args(&["explode", "1m"])).unwrap();

        let record = state.cooldowns.get().get("boom").copied().unwrap();
        assert_eq!(record.per_user, Duration::from_secs(60));
        assert_eq!(record.per_sound, Duration::ZERO);
    }

    #[test]
    fn cooldown_set_rejects_unknown_sounds() {
        let state = state();
        assert!(cooldown_set(&state, CooldownField::PerUser, &args(&["vuvuzela", "1m"])).is_err());
        assert!(state.cooldowns.get().is_empty());
    }

    #[test]
    fn cooldown_rm_needs_an_existing_record() {
        let state = state();

        assert!(cooldown_clear(&state, CooldownField::PerUser, &args(&["boom"])).is_err());

        cooldown_set(&state, CooldownField::PerUser, &args(&["boom", "30s"])).unwrap();
        cooldown_clear(&state, CooldownField::PerUser, &args(&["boom"])).unwrap();
        assert!(state.cooldowns.get().is_empty());
    }
}
