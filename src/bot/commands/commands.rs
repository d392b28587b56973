use crate::bot::commands::moderation::commands as moderation;
use crate::bot::commands::playback::commands as playback;
use crate::bot::commands::Branch;

/// Builds the full command tree. The play leaf doubles as the root default,
/// which is what makes a bare `!xd explode` play the sound named by the
/// unmatched token.
pub fn command_tree() -> Branch {
    Branch::new()
        .default_leaf(playback::play_command())
        .leaf("play", playback::play_command())
        .leaf("stop", playback::stop_command())
        .leaf("say", playback::say_command())
        .leaf("role", moderation::role_command())
        .leaf("prefs", moderation::prefs_command())
        .leaf("prefix", moderation::prefix_command())
        .branch(
            "alias",
            Branch::new()
                .leaf("set", moderation::alias_set_command())
                .leaf("rm", moderation::alias_rm_command()),
        )
        .branch(
            "cooldown",
            Branch::new()
                .branch(
                    "set",
                    Branch::new()
                        .leaf("user", moderation::cooldown_set_user_command())
                        .leaf("sound", moderation::cooldown_set_sound_command()),
                )
                .branch(
                    "rm",
                    Branch::new()
                        .leaf("user", moderation::cooldown_rm_user_command())
                        .leaf("sound", moderation::cooldown_rm_sound_command()),
                ),
        )
}
